//! Display preference (light/dark) resolution and persistence.
//!
//! ARCHITECTURE
//! ============
//! - `store`, `signal`, `surface`: adapters over local storage, the cookie
//!   string, the OS color-scheme broadcast and the rendered document.
//! - `resolver`: picks the effective preference by fixed precedence.
//! - `publisher`: owns the current value, writes it through to every store
//!   and notifies subscribers.
//! - `context`: exposes the publisher to Leptos components.
//!
//! Browser adapters live in `browser` and need the `csr` feature; native
//! builds run on in-memory stores.

#[cfg(feature = "csr")]
pub mod browser;
pub mod config;
pub mod context;
pub mod error;
pub mod preference;
pub mod publisher;
pub mod resolver;
pub mod signal;
pub mod store;
pub mod surface;
#[cfg(test)]
pub(crate) mod testing;


pub use config::ThemeConfig;
pub use context::{ThemeContext, use_theme};
pub use preference::{ChoiceState, Preference, PreferenceSource, Resolution};
pub use publisher::{Subscription, ThemePublisher};

use resolver::PreferenceResolver;
use signal::NoSignal;
use store::{MemoryBackend, PreferenceStores};
use surface::HeadlessSurface;

/// Publisher over in-memory stores with no live signal.
pub fn headless_publisher() -> ThemePublisher {
    let stores = PreferenceStores::new()
        .with_backend(MemoryBackend::explicit())
        .with_backend(MemoryBackend::cookie());
    ThemePublisher::new(PreferenceResolver::new(stores, NoSignal), HeadlessSurface)
}

/// Publisher for the current build: browser adapters under `csr`,
/// in-memory otherwise.
pub fn publisher_for_environment(config: &ThemeConfig) -> ThemePublisher {
    #[cfg(feature = "csr")]
    {
        browser::browser_publisher(config)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("theme: no browser, keeping {:?} in memory", config.storage_key);
        headless_publisher()
    }
}
