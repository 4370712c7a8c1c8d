//! In-memory owner of the current display preference.
//!
//! DESIGN
//! ======
//! Every change runs the same pipeline: mark the render surface, write every
//! backend (failures are logged, never raised), then notify subscribers in
//! registration order. Whether the user has chosen explicitly is tracked in
//! memory as [`ChoiceState`] and seeded once by `initialize`. A system signal
//! event while `Unset` is handled as a `set`, so only the first one lands.
//!
//! The publisher is `Rc`-based and therefore confined to one thread, which
//! serializes `set` and signal handling. Callbacks run with no interior borrow
//! held, so subscribers may call back into the publisher.

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::preference::{ChoiceState, Preference, PreferenceSource};
use super::resolver::PreferenceResolver;
use super::signal::SignalGuard;
use super::surface::RenderSurface;

type Subscriber = Rc<dyn Fn(Preference)>;

struct PublisherInner {
    resolver: PreferenceResolver,
    surface: Box<dyn RenderSurface>,
    current: Cell<Option<Preference>>,
    choice: Cell<ChoiceState>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_subscriber: Cell<u64>,
    signal_guard: RefCell<Option<SignalGuard>>,
}

/// Shared handle to the theme state. Clones refer to the same state.
#[derive(Clone)]
pub struct ThemePublisher {
    inner: Rc<PublisherInner>,
}

impl ThemePublisher {
    /// Build the publisher and register for system signal events. The
    /// registration lasts until [`ThemePublisher::dispose`] or until the last
    /// handle is dropped.
    pub fn new(resolver: PreferenceResolver, surface: impl RenderSurface + 'static) -> Self {
        let inner = Rc::new_cyclic(|weak: &Weak<PublisherInner>| {
            let weak = weak.clone();
            let signal_guard = resolver.signal().subscribe(Box::new(move |prefers_dark| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_system_signal(prefers_dark);
                }
            }));
            if signal_guard.is_none() {
                log::debug!("theme: system color-scheme signal unavailable");
            }
            PublisherInner {
                resolver,
                surface: Box::new(surface),
                current: Cell::new(None),
                choice: Cell::new(ChoiceState::Unset),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
                signal_guard: RefCell::new(signal_guard),
            }
        });
        Self { inner }
    }

    /// Resolve the starting value, apply it and return it.
    ///
    /// Subscribers are not notified; they only hear about later changes.
    pub fn initialize(&self) -> Preference {
        let resolution = self.inner.resolver.resolve_with_source();
        log::debug!("theme: resolved {} from {:?}", resolution.preference, resolution.source);
        let choice = if resolution.source == PreferenceSource::ExplicitStore {
            ChoiceState::Explicit
        } else {
            ChoiceState::Unset
        };
        self.inner.choice.set(choice);
        self.inner.commit(resolution.preference);
        resolution.preference
    }

    /// Current value without I/O. `Light` until initialized.
    pub fn get(&self) -> Preference {
        self.inner.current.get().unwrap_or_default()
    }

    pub fn choice_state(&self) -> ChoiceState {
        self.inner.choice.get()
    }

    /// Record an explicit choice and publish it.
    pub fn set(&self, preference: Preference) {
        self.inner.set(preference);
    }

    pub fn toggle(&self) {
        self.set(self.get().opposite());
    }

    /// Register `callback` for future changes.
    pub fn subscribe(&self, callback: impl Fn(Preference) + 'static) -> Subscription {
        let id = self.inner.next_subscriber.get();
        self.inner.next_subscriber.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription { publisher: Rc::downgrade(&self.inner), id }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether the system signal registration is still held.
    pub fn is_listening(&self) -> bool {
        self.inner.signal_guard.borrow().is_some()
    }

    /// Tear down: release the signal registration and drop all subscribers.
    /// The current value stays readable.
    pub fn dispose(&self) {
        let guard = self.inner.signal_guard.borrow_mut().take();
        if let Some(guard) = guard {
            guard.release();
        }
        self.inner.subscribers.borrow_mut().clear();
    }
}

impl PublisherInner {
    fn set(&self, preference: Preference) {
        self.choice.set(ChoiceState::Explicit);
        self.commit(preference);
        self.notify(preference);
    }

    fn commit(&self, preference: Preference) {
        self.current.set(Some(preference));
        self.surface.apply(preference);
        for err in self.resolver.stores().write_all(preference) {
            log::warn!("theme: failed to persist {preference}: {err}");
        }
    }

    fn notify(&self, preference: Preference) {
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(preference);
        }
    }

    fn on_system_signal(&self, prefers_dark: bool) {
        if self.current.get().is_none() {
            log::debug!("theme: signal before initialize ignored");
            return;
        }
        if self.choice.get() == ChoiceState::Explicit {
            log::debug!("theme: signal ignored, explicit choice recorded");
            return;
        }
        let preference = Preference::from_prefers_dark(prefers_dark);
        log::debug!("theme: system signal selects {preference}");
        self.set(preference);
    }
}

/// Registration returned by [`ThemePublisher::subscribe`].
///
/// Dropping it leaves the callback registered; call
/// [`Subscription::unsubscribe`] when the owning view is torn down.
#[derive(Debug)]
pub struct Subscription {
    publisher: Weak<PublisherInner>,
    id: u64,
}

impl Subscription {
    /// Remove the callback. Repeated calls are no-ops.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.publisher.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
