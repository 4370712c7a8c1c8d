//! Render-surface boundary: the one operation the theme core needs from the UI.

use std::rc::Rc;

use super::preference::Preference;

/// Applies the visual marker for a preference (e.g. a root style class).
pub trait RenderSurface {
    fn apply(&self, preference: Preference);
}

impl<T: RenderSurface + ?Sized> RenderSurface for Rc<T> {
    fn apply(&self, preference: Preference) {
        (**self).apply(preference);
    }
}

/// Surface with nothing to mark, used outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {
    fn apply(&self, preference: Preference) {
        log::trace!("theme: headless surface applied {preference}");
    }
}
