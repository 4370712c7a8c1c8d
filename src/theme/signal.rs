//! OS/browser color-scheme signal.
//!
//! The subscription is a scoped resource: [`SignalGuard`] deregisters the
//! handler when released or dropped, whichever comes first.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

/// Callback receiving the new "prefers dark" value.
pub type SignalHandler = Box<dyn Fn(bool)>;

/// Live source of the "prefers dark" boolean.
pub trait SystemSignal {
    /// Current value. Unavailable sources report `false`.
    fn prefers_dark(&self) -> bool;

    /// Register `handler` for change events. Returns `None` when the source
    /// cannot be observed.
    fn subscribe(&self, handler: SignalHandler) -> Option<SignalGuard>;
}

/// Handle to a registered signal handler.
#[must_use = "dropping the guard deregisters the handler"]
pub struct SignalGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl SignalGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Deregister now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for SignalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalGuard").field("active", &self.release.is_some()).finish()
    }
}

/// A signal source that is never available (native builds, old browsers).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSignal;

impl SystemSignal for NoSignal {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn subscribe(&self, _handler: SignalHandler) -> Option<SignalGuard> {
        None
    }
}
