//! Shared auth route helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard is only reachable after the simulated sign-in; every guarded
//! route applies the same redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const AUTH_ROUTE: &str = "/auth";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Whether a guarded route should bounce the visitor to the auth page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.signed_in
}

/// Whether the auth page should move on to the dashboard.
pub fn should_enter_dashboard(state: &AuthState) -> bool {
    !state.loading && state.signed_in
}

/// Redirect to the auth page whenever nobody is signed in.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard once the simulated sign-in completes.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_enter_dashboard(&auth.get()) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });
}
