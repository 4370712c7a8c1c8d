//! Leptos bridge for the theme publisher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components only see [`ThemeContext`]: a reactive read of the
//! current preference plus `toggle`. The publisher itself lives in a local
//! stored value owned by the root component, so its signal listener is
//! released when the app is unmounted.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::preference::Preference;
use super::publisher::ThemePublisher;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: RwSignal<Preference>,
    publisher: StoredValue<ThemePublisher, LocalStorage>,
}

impl ThemeContext {
    /// Initialize `publisher`, mirror its value into a signal and provide the
    /// context to descendants.
    pub fn provide(publisher: ThemePublisher) -> Self {
        let preference = RwSignal::new(publisher.initialize());
        // Lives as long as the publisher; both go away in `dispose`.
        publisher.subscribe(move |next| preference.set(next));

        let ctx = Self { preference, publisher: StoredValue::new_local(publisher) };
        provide_context(ctx);
        on_cleanup(move || ctx.dispose());
        ctx
    }

    /// Tracked read of the current preference.
    pub fn preference(&self) -> Preference {
        self.preference.get()
    }

    pub fn is_dark(&self) -> bool {
        self.preference().is_dark()
    }

    pub fn toggle(&self) {
        self.publisher.with_value(ThemePublisher::toggle);
    }

    fn dispose(&self) {
        if self.publisher.try_with_value(ThemePublisher::dispose).is_none() {
            log::debug!("theme: publisher already dropped at cleanup");
        }
    }
}

/// Theme context provided by the root component.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
