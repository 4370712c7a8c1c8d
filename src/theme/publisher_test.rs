use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::theme::signal::NoSignal;
use crate::theme::store::{MemoryBackend, PersistenceBackend, PreferenceStores};
use crate::theme::testing::{ManualSignal, RecordingSurface};

struct Harness {
    publisher: ThemePublisher,
    explicit: Rc<MemoryBackend>,
    cookie: Rc<MemoryBackend>,
    signal: ManualSignal,
    surface: Rc<RecordingSurface>,
}

fn harness_with(explicit: MemoryBackend, cookie: MemoryBackend, prefers_dark: bool) -> Harness {
    let explicit = Rc::new(explicit);
    let cookie = Rc::new(cookie);
    let signal = ManualSignal::new(prefers_dark);
    let surface = Rc::new(RecordingSurface::default());
    let stores = PreferenceStores::new()
        .with_backend(Rc::clone(&explicit))
        .with_backend(Rc::clone(&cookie));
    let resolver = PreferenceResolver::new(stores, signal.clone());
    let publisher = ThemePublisher::new(resolver, Rc::clone(&surface));
    Harness { publisher, explicit, cookie, signal, surface }
}

fn harness() -> Harness {
    harness_with(MemoryBackend::explicit(), MemoryBackend::cookie(), false)
}

fn record(publisher: &ThemePublisher) -> (Rc<RefCell<Vec<Preference>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = publisher.subscribe(move |p| sink.borrow_mut().push(p));
    (seen, subscription)
}

fn assert_write_through(h: &Harness) {
    let current = Some(h.publisher.get().as_str().to_owned());
    assert_eq!(h.explicit.value(), current);
    assert_eq!(h.cookie.value(), current);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_applies_and_persists_resolved_value() {
    let h = harness_with(MemoryBackend::explicit(), MemoryBackend::cookie().with_value("dark"), false);
    assert_eq!(h.publisher.initialize(), Preference::Dark);
    assert_eq!(h.publisher.get(), Preference::Dark);
    assert_eq!(h.surface.applied(), vec![Preference::Dark]);
    assert_write_through(&h);
}

#[test]
fn initialize_with_invalid_explicit_value_uses_cookie() {
    let h = harness_with(
        MemoryBackend::explicit().with_value("blue"),
        MemoryBackend::cookie().with_value("dark"),
        false,
    );
    assert_eq!(h.publisher.initialize(), Preference::Dark);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Unset);
    assert_eq!(h.explicit.value().as_deref(), Some("dark"));
}

#[test]
fn initialize_seeds_explicit_state_from_explicit_store() {
    let h = harness_with(MemoryBackend::explicit().with_value("light"), MemoryBackend::cookie(), true);
    assert_eq!(h.publisher.initialize(), Preference::Light);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Explicit);
}

#[test]
fn initialize_does_not_notify() {
    let h = harness();
    let (seen, _sub) = record(&h.publisher);
    h.publisher.initialize();
    assert!(seen.borrow().is_empty());
}

#[test]
fn get_before_initialize_is_light_without_side_effects() {
    let h = harness();
    assert_eq!(h.publisher.get(), Preference::Light);
    assert!(h.surface.applied().is_empty());
    assert_eq!(h.explicit.write_count(), 0);
}

// =============================================================
// set / toggle
// =============================================================

#[test]
fn every_set_keeps_backends_in_step() {
    let h = harness();
    h.publisher.initialize();
    for pref in [Preference::Dark, Preference::Dark, Preference::Light, Preference::Dark, Preference::Light] {
        h.publisher.set(pref);
        assert_eq!(h.publisher.get(), pref);
        assert_write_through(&h);
    }
}

#[test]
fn set_marks_choice_explicit() {
    let h = harness();
    h.publisher.initialize();
    assert_eq!(h.publisher.choice_state(), ChoiceState::Unset);
    h.publisher.set(Preference::Light);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Explicit);
}

#[test]
fn set_same_value_twice_notifies_twice_with_two_writes_each() {
    let h = harness();
    h.publisher.initialize();
    let explicit_before = h.explicit.write_count();
    let cookie_before = h.cookie.write_count();
    let (seen, _sub) = record(&h.publisher);

    h.publisher.set(Preference::Dark);
    h.publisher.set(Preference::Dark);

    assert_eq!(*seen.borrow(), vec![Preference::Dark, Preference::Dark]);
    assert_eq!(h.explicit.write_count() - explicit_before, 2);
    assert_eq!(h.cookie.write_count() - cookie_before, 2);
    assert_eq!(h.publisher.get(), Preference::Dark);
}

#[test]
fn toggle_flips_and_double_toggle_restores() {
    let h = harness();
    assert_eq!(h.publisher.initialize(), Preference::Light);
    h.publisher.toggle();
    assert_eq!(h.publisher.get(), Preference::Dark);
    h.publisher.toggle();
    assert_eq!(h.publisher.get(), Preference::Light);
    assert_write_through(&h);
}

#[test]
fn side_effects_run_surface_then_backends_then_subscribers() {
    let h = harness();
    h.publisher.initialize();
    let explicit = Rc::clone(&h.explicit);
    let cookie = Rc::clone(&h.cookie);
    let surface = Rc::clone(&h.surface);
    let observed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&observed);
    let _sub = h.publisher.subscribe(move |_| {
        *sink.borrow_mut() = Some((surface.last(), explicit.value(), cookie.value()));
    });

    h.publisher.set(Preference::Dark);

    let expected = Some((Some(Preference::Dark), Some("dark".to_owned()), Some("dark".to_owned())));
    assert_eq!(*observed.borrow(), expected);
}

#[test]
fn failing_backend_does_not_block_other_backend_or_notification() {
    let h = harness();
    h.publisher.initialize();
    h.explicit.set_available(false);
    let (seen, _sub) = record(&h.publisher);

    h.publisher.set(Preference::Dark);

    assert_eq!(h.publisher.get(), Preference::Dark);
    assert_eq!(h.surface.last(), Some(Preference::Dark));
    assert_eq!(h.cookie.value().as_deref(), Some("dark"));
    assert_eq!(*seen.borrow(), vec![Preference::Dark]);
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn subscribers_called_in_registration_order() {
    let h = harness();
    h.publisher.initialize();
    let order = Rc::new(RefCell::new(Vec::new()));
    let subs: Vec<Subscription> = (0..3)
        .map(|i| {
            let order = Rc::clone(&order);
            h.publisher.subscribe(move |_| order.borrow_mut().push(i))
        })
        .collect();

    h.publisher.toggle();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
    assert_eq!(subs.len(), 3);
}

#[test]
fn unsubscribe_is_idempotent() {
    let h = harness();
    h.publisher.initialize();
    let (seen, sub) = record(&h.publisher);
    let (_other_seen, _other) = record(&h.publisher);
    assert_eq!(h.publisher.subscriber_count(), 2);

    sub.unsubscribe();
    sub.unsubscribe();
    assert_eq!(h.publisher.subscriber_count(), 1);

    h.publisher.set(Preference::Dark);
    assert!(seen.borrow().is_empty());
}

#[test]
fn unsubscribe_after_publisher_dropped_is_noop() {
    let h = harness();
    let (_seen, sub) = record(&h.publisher);
    drop(h);
    sub.unsubscribe();
}

#[test]
fn subscriber_may_read_and_toggle_reentrantly() {
    let h = harness();
    h.publisher.initialize();
    let publisher = h.publisher.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = h.publisher.subscribe(move |p| {
        sink.borrow_mut().push(publisher.get());
        if p == Preference::Dark {
            publisher.set(Preference::Light);
        }
    });

    h.publisher.set(Preference::Dark);
    assert_eq!(*seen.borrow(), vec![Preference::Dark, Preference::Light]);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert_write_through(&h);
}

// =============================================================
// system signal
// =============================================================

#[test]
fn first_signal_while_unset_applies_and_records_choice() {
    let h = harness();
    h.publisher.initialize();
    let (seen, _sub) = record(&h.publisher);

    h.signal.emit(true);
    assert_eq!(h.publisher.get(), Preference::Dark);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Explicit);
    assert_eq!(*seen.borrow(), vec![Preference::Dark]);
    assert_write_through(&h);

    h.signal.emit(false);
    assert_eq!(h.publisher.get(), Preference::Dark);
    assert_eq!(*seen.borrow(), vec![Preference::Dark]);
    assert_write_through(&h);
}

#[test]
fn later_signals_ignored_after_cookie_seeded_start() {
    let h = harness_with(MemoryBackend::explicit(), MemoryBackend::cookie().with_value("dark"), false);
    assert_eq!(h.publisher.initialize(), Preference::Dark);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Unset);

    h.signal.emit(false);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert_eq!(h.publisher.choice_state(), ChoiceState::Explicit);

    h.signal.emit(true);
    h.signal.emit(false);
    h.signal.emit(true);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert_eq!(h.explicit.value().as_deref(), Some("light"));
    assert_eq!(h.cookie.value().as_deref(), Some("light"));
}

#[test]
fn signal_ignored_after_explicit_set() {
    let h = harness();
    h.publisher.initialize();
    h.publisher.set(Preference::Light);
    let (seen, _sub) = record(&h.publisher);

    h.signal.emit(true);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert!(seen.borrow().is_empty());
    assert_write_through(&h);
}

#[test]
fn signal_ignored_when_explicit_store_seeded_choice() {
    let h = harness_with(MemoryBackend::explicit().with_value("dark"), MemoryBackend::cookie(), false);
    h.publisher.initialize();
    h.signal.emit(false);
    assert_eq!(h.publisher.get(), Preference::Dark);
}

#[test]
fn signal_before_initialize_is_ignored() {
    let h = harness();
    h.signal.emit(true);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert!(h.surface.applied().is_empty());
    assert_eq!(h.explicit.read(), None);
}

#[test]
fn publisher_registers_one_signal_listener() {
    let h = harness();
    assert_eq!(h.signal.listener_count(), 1);
    assert!(h.publisher.is_listening());
}

#[test]
fn dispose_releases_signal_and_subscribers() {
    let h = harness();
    h.publisher.initialize();
    let (seen, _sub) = record(&h.publisher);

    h.publisher.dispose();
    assert_eq!(h.signal.listener_count(), 0);
    assert!(!h.publisher.is_listening());
    assert_eq!(h.publisher.subscriber_count(), 0);

    h.signal.emit(true);
    assert_eq!(h.publisher.get(), Preference::Light);
    assert!(seen.borrow().is_empty());
}

#[test]
fn dropping_last_handle_releases_signal() {
    let h = harness();
    let signal = h.signal.clone();
    let clone = h.publisher.clone();
    drop(h);
    assert_eq!(signal.listener_count(), 1);
    drop(clone);
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn unavailable_signal_source_is_tolerated() {
    let stores = PreferenceStores::new().with_backend(MemoryBackend::explicit());
    let publisher = ThemePublisher::new(PreferenceResolver::new(stores, NoSignal), RecordingSurface::default());
    assert!(!publisher.is_listening());
    assert_eq!(publisher.initialize(), Preference::Light);
    publisher.toggle();
    assert_eq!(publisher.get(), Preference::Dark);
}
