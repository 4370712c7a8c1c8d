//! In-memory doubles for the theme adapters, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use cookie::Cookie;

use super::error::BackendError;
use super::preference::Preference;
use super::signal::{SignalGuard, SignalHandler, SystemSignal};
use super::surface::RenderSurface;

/// Cookie jar with `document.cookie` semantics: assignments overwrite by name
/// and reads return only `name=value` pairs.
#[derive(Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
    assignments: RefCell<Vec<String>>,
    disabled: Cell<bool>,
}

impl MemoryCookieJar {
    pub fn with_header(header: &str) -> Self {
        let jar = Self::default();
        for cookie in Cookie::split_parse(header).flatten() {
            jar.cookies
                .borrow_mut()
                .insert(cookie.name().to_owned(), cookie.value().to_owned());
        }
        jar
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }

    /// Raw assignments written so far, oldest first.
    pub fn assignments(&self) -> Vec<String> {
        self.assignments.borrow().clone()
    }
}

impl super::store::CookieJar for Rc<MemoryCookieJar> {
    fn cookie_string(&self) -> Result<String, BackendError> {
        if self.disabled.get() {
            return Err(BackendError::Unavailable { backend: "cookie" });
        }
        let header = self
            .cookies
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        Ok(header)
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), BackendError> {
        if self.disabled.get() {
            return Err(BackendError::WriteRejected { backend: "cookie", reason: "cookies disabled".to_owned() });
        }
        let cookie = Cookie::parse(assignment.to_owned())
            .map_err(|err| BackendError::WriteRejected { backend: "cookie", reason: err.to_string() })?;
        self.cookies
            .borrow_mut()
            .insert(cookie.name().to_owned(), cookie.value().to_owned());
        self.assignments.borrow_mut().push(assignment.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct ManualSignalInner {
    prefers_dark: Cell<bool>,
    handlers: RefCell<Vec<(u64, Rc<dyn Fn(bool)>)>>,
    next_id: Cell<u64>,
}

/// Color-scheme signal driven by the test.
#[derive(Clone, Default)]
pub struct ManualSignal {
    inner: Rc<ManualSignalInner>,
}

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        let signal = Self::default();
        signal.inner.prefers_dark.set(prefers_dark);
        signal
    }

    /// Change the reported value and fire every registered handler.
    pub fn emit(&self, prefers_dark: bool) {
        self.inner.prefers_dark.set(prefers_dark);
        let handlers: Vec<Rc<dyn Fn(bool)>> =
            self.inner.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
        for handler in handlers {
            handler(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

impl SystemSignal for ManualSignal {
    fn prefers_dark(&self) -> bool {
        self.inner.prefers_dark.get()
    }

    fn subscribe(&self, handler: SignalHandler) -> Option<SignalGuard> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.handlers.borrow_mut().push((id, Rc::from(handler)));
        let weak: Weak<ManualSignalInner> = Rc::downgrade(&self.inner);
        Some(SignalGuard::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handlers.borrow_mut().retain(|(existing, _)| *existing != id);
            }
        }))
    }
}

/// Render surface that remembers every marker it was asked to apply.
#[derive(Default)]
pub struct RecordingSurface {
    applied: RefCell<Vec<Preference>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<Preference> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<Preference> {
        self.applied.borrow().last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&self, preference: Preference) {
        self.applied.borrow_mut().push(preference);
    }
}
