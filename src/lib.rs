//! # budgey
//!
//! Leptos + WASM frontend for the Budgey.ai personal finance site: a landing
//! page, simulated sign-in and registration, and a mock dashboard, all
//! rendered under a persisted light/dark display preference.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`theme`] | Preference resolution, persistence, OS signal, publisher |
//! | [`state`] | Auth session and dashboard figures |
//! | [`util`] | Form validation, password strength, route guards |
//! | [`net`] | Simulated auth requests |
//! | [`components`] | Shared header and theme toggle |
//! | [`pages`] | Landing, auth and dashboard pages |
//! | [`app`] | Root component and router |
//!
//! Browser adapters and the WASM entry point need the `csr` feature. Without
//! it everything runs natively on in-memory stores, which is how the tests
//! run.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
