//! Preference resolution in fixed precedence order.
//!
//! explicit store > cookie store > system signal > `Light`. Every branch has
//! a fallback, so resolution never fails.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::preference::{Preference, PreferenceSource, Resolution};
use super::signal::SystemSignal;
use super::store::PreferenceStores;

pub struct PreferenceResolver {
    stores: PreferenceStores,
    signal: Box<dyn SystemSignal>,
}

impl PreferenceResolver {
    pub fn new(stores: PreferenceStores, signal: impl SystemSignal + 'static) -> Self {
        Self { stores, signal: Box::new(signal) }
    }

    pub fn resolve(&self) -> Preference {
        self.resolve_with_source().preference
    }

    /// Resolve and report which source won.
    pub fn resolve_with_source(&self) -> Resolution {
        if let Some((preference, source)) = self.stores.read_first_valid() {
            return Resolution { preference, source };
        }
        if self.signal.prefers_dark() {
            return Resolution { preference: Preference::Dark, source: PreferenceSource::SystemSignal };
        }
        Resolution { preference: Preference::default(), source: PreferenceSource::Default }
    }

    pub fn stores(&self) -> &PreferenceStores {
        &self.stores
    }

    pub fn signal(&self) -> &dyn SystemSignal {
        self.signal.as_ref()
    }
}
