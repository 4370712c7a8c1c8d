//! Browser adapters: `localStorage`, `document.cookie`, `matchMedia` and the
//! `<html>` element. Only compiled for the `csr` build.
//!
//! ERROR HANDLING
//! ==============
//! Every web-sys failure maps to "absent" on read and to a [`BackendError`]
//! on write; nothing here panics when storage or cookies are disabled.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlDocument, MediaQueryList, MediaQueryListEvent, Storage};

use super::config::ThemeConfig;
use super::error::BackendError;
use super::preference::{Preference, PreferenceSource};
use super::publisher::ThemePublisher;
use super::resolver::PreferenceResolver;
use super::signal::{SignalGuard, SignalHandler, SystemSignal};
use super::store::{CookieBackend, CookieJar, PersistenceBackend, PreferenceStores};
use super::surface::RenderSurface;

const LOCAL_STORAGE: &str = "local-storage";
const DOCUMENT_COOKIE: &str = "document-cookie";

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Wire the browser adapters into a publisher.
pub fn browser_publisher(config: &ThemeConfig) -> ThemePublisher {
    let stores = PreferenceStores::new()
        .with_backend(LocalStorageBackend::new(config))
        .with_backend(CookieBackend::new(DocumentCookieJar, config));
    let resolver = PreferenceResolver::new(stores, MediaQuerySignal::new(config));
    ThemePublisher::new(resolver, DocumentSurface::new(config))
}

/// Explicit-choice store in `window.localStorage`.
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(config: &ThemeConfig) -> Self {
        Self { key: config.storage_key.clone() }
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("theme: localStorage unavailable: {}", js_reason(&err));
                None
            }
        }
    }
}

impl PersistenceBackend for LocalStorageBackend {
    fn name(&self) -> &'static str {
        LOCAL_STORAGE
    }

    fn source(&self) -> PreferenceSource {
        PreferenceSource::ExplicitStore
    }

    fn read(&self) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme: localStorage read failed: {}", js_reason(&err));
                None
            }
        }
    }

    fn write(&self, preference: Preference) -> Result<(), BackendError> {
        let storage = Self::storage().ok_or(BackendError::Unavailable { backend: LOCAL_STORAGE })?;
        storage
            .set_item(&self.key, preference.as_str())
            .map_err(|err| BackendError::WriteRejected { backend: LOCAL_STORAGE, reason: js_reason(&err) })
    }
}

/// `document.cookie` as a [`CookieJar`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieJar;

impl DocumentCookieJar {
    fn document() -> Result<HtmlDocument, BackendError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_ref::<HtmlDocument>().cloned())
            .ok_or(BackendError::Unavailable { backend: DOCUMENT_COOKIE })
    }
}

impl CookieJar for DocumentCookieJar {
    fn cookie_string(&self) -> Result<String, BackendError> {
        Self::document()?
            .cookie()
            .map_err(|err| BackendError::ReadFailed { backend: DOCUMENT_COOKIE, reason: js_reason(&err) })
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), BackendError> {
        Self::document()?
            .set_cookie(assignment)
            .map_err(|err| BackendError::WriteRejected { backend: DOCUMENT_COOKIE, reason: js_reason(&err) })
    }
}

/// `matchMedia('(prefers-color-scheme: dark)')` change events.
pub struct MediaQuerySignal {
    query: String,
}

impl MediaQuerySignal {
    pub fn new(config: &ThemeConfig) -> Self {
        Self { query: config.media_query.clone() }
    }

    fn list(&self) -> Option<MediaQueryList> {
        let window = web_sys::window()?;
        match window.match_media(&self.query) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("theme: matchMedia({}) failed: {}", self.query, js_reason(&err));
                None
            }
        }
    }
}

impl SystemSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.list().is_some_and(|list| list.matches())
    }

    fn subscribe(&self, handler: SignalHandler) -> Option<SignalGuard> {
        let list = self.list()?;
        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            handler(event.matches());
        });
        if let Err(err) = list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            log::debug!("theme: cannot listen for color-scheme changes: {}", js_reason(&err));
            return None;
        }
        Some(SignalGuard::new(move || {
            if let Err(err) = list.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                log::debug!("theme: removing color-scheme listener failed: {}", js_reason(&err));
            }
            drop(listener);
        }))
    }
}

/// Marks `<html>` with the dark class and a `data-theme` attribute.
pub struct DocumentSurface {
    dark_class: String,
}

impl DocumentSurface {
    pub fn new(config: &ThemeConfig) -> Self {
        Self { dark_class: config.dark_class.clone() }
    }
}

impl RenderSurface for DocumentSurface {
    fn apply(&self, preference: Preference) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            log::debug!("theme: no document element to mark");
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(&self.dark_class, preference.is_dark()) {
            log::warn!("theme: class toggle failed: {}", js_reason(&err));
        }
        if let Err(err) = root.set_attribute("data-theme", preference.as_str()) {
            log::warn!("theme: data-theme update failed: {}", js_reason(&err));
        }
    }
}
