//! Persistence backends for the theme preference.
//!
//! DESIGN
//! ======
//! Every store (local key-value, cookie, in-memory) is one implementation of
//! [`PersistenceBackend`]. [`PreferenceStores`] keeps them in precedence order
//! so the resolver and publisher never name a concrete backend.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use super::config::ThemeConfig;
use super::error::BackendError;
use super::preference::{Preference, PreferenceSource};

/// A single place a preference can be persisted to and read back from.
pub trait PersistenceBackend {
    /// Short label used in log lines and errors.
    fn name(&self) -> &'static str;

    /// Precedence slot this backend occupies during resolution.
    fn source(&self) -> PreferenceSource;

    /// Raw stored value, if any. Validation happens in the caller.
    fn read(&self) -> Option<String>;

    fn write(&self, preference: Preference) -> Result<(), BackendError>;
}

impl<T: PersistenceBackend + ?Sized> PersistenceBackend for Rc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn source(&self) -> PreferenceSource {
        (**self).source()
    }

    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, preference: Preference) -> Result<(), BackendError> {
        (**self).write(preference)
    }
}

/// Process-local backend. Stands in for browser storage in native builds.
#[derive(Debug)]
pub struct MemoryBackend {
    name: &'static str,
    source: PreferenceSource,
    value: RefCell<Option<String>>,
    available: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryBackend {
    pub fn new(name: &'static str, source: PreferenceSource) -> Self {
        Self {
            name,
            source,
            value: RefCell::new(None),
            available: Cell::new(true),
            writes: Cell::new(0),
        }
    }

    /// In-memory stand-in for the explicit (local storage) slot.
    pub fn explicit() -> Self {
        Self::new("memory-explicit", PreferenceSource::ExplicitStore)
    }

    /// In-memory stand-in for the cookie slot.
    pub fn cookie() -> Self {
        Self::new("memory-cookie", PreferenceSource::CookieStore)
    }

    /// Seed a raw value, valid or not.
    #[must_use]
    pub fn with_value(self, raw: &str) -> Self {
        *self.value.borrow_mut() = Some(raw.to_owned());
        self
    }

    /// Simulate storage being disabled. Reads return nothing and writes fail.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PersistenceBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn source(&self) -> PreferenceSource {
        self.source
    }

    fn read(&self) -> Option<String> {
        if !self.available.get() {
            return None;
        }
        self.value.borrow().clone()
    }

    fn write(&self, preference: Preference) -> Result<(), BackendError> {
        if !self.available.get() {
            return Err(BackendError::Unavailable { backend: self.name });
        }
        *self.value.borrow_mut() = Some(preference.as_str().to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Access to an ambient cookie string, such as `document.cookie`.
pub trait CookieJar {
    /// The `name=value; name2=value2` string currently visible.
    fn cookie_string(&self) -> Result<String, BackendError>;

    /// Store one `Set-Cookie` style assignment.
    fn set_cookie(&self, assignment: &str) -> Result<(), BackendError>;
}

/// Cookie-backed preference store.
pub struct CookieBackend<J> {
    jar: J,
    name: String,
    path: String,
    lifetime: Duration,
    same_site: SameSite,
    clock: fn() -> OffsetDateTime,
}

impl<J: CookieJar> CookieBackend<J> {
    pub fn new(jar: J, config: &ThemeConfig) -> Self {
        Self {
            jar,
            name: config.cookie_name.clone(),
            path: config.cookie_path.clone(),
            lifetime: config.cookie_lifetime,
            same_site: config.cookie_same_site,
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Replace the wall clock used to compute `Expires`.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Build the assignment written for `preference`.
    pub fn assignment(&self, preference: Preference) -> String {
        let expires = (self.clock)() + self.lifetime;
        Cookie::build((self.name.as_str(), preference.as_str()))
            .path(self.path.as_str())
            .same_site(self.same_site)
            .expires(expires)
            .build()
            .to_string()
    }
}

impl<J: CookieJar> PersistenceBackend for CookieBackend<J> {
    fn name(&self) -> &'static str {
        "cookie"
    }

    fn source(&self) -> PreferenceSource {
        PreferenceSource::CookieStore
    }

    fn read(&self) -> Option<String> {
        match self.jar.cookie_string() {
            Ok(header) => find_cookie(&header, &self.name),
            Err(err) => {
                log::debug!("theme: cookie read skipped: {err}");
                None
            }
        }
    }

    fn write(&self, preference: Preference) -> Result<(), BackendError> {
        self.jar.set_cookie(&self.assignment(preference))
    }
}

/// Find the value of cookie `name` in a `Cookie` header style string.
/// Malformed pairs are skipped.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// Ordered set of backends, highest precedence first.
#[derive(Default)]
pub struct PreferenceStores {
    backends: Vec<Box<dyn PersistenceBackend>>,
}

impl PreferenceStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend. Backends stay sorted by [`PreferenceSource`]; ties keep
    /// insertion order.
    #[must_use]
    pub fn with_backend(mut self, backend: impl PersistenceBackend + 'static) -> Self {
        self.push(backend);
        self
    }

    pub fn push(&mut self, backend: impl PersistenceBackend + 'static) {
        self.backends.push(Box::new(backend));
        self.backends.sort_by_key(|b| b.source());
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// First valid stored value in precedence order.
    pub fn read_first_valid(&self) -> Option<(Preference, PreferenceSource)> {
        self.backends.iter().find_map(|backend| {
            let raw = backend.read()?;
            match Preference::parse(&raw) {
                Some(preference) => Some((preference, backend.source())),
                None => {
                    log::debug!("theme: ignoring unrecognized value {raw:?} in {}", backend.name());
                    None
                }
            }
        })
    }

    /// Write `preference` to every backend. Each write is attempted even when
    /// an earlier one fails; the failures are returned in backend order.
    pub fn write_all(&self, preference: Preference) -> Vec<BackendError> {
        self.backends
            .iter()
            .filter_map(|backend| backend.write(preference).err())
            .collect()
    }
}
