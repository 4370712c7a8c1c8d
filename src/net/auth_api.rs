//! Simulated auth requests.
//!
//! A fixed delay stands in for the network round trip (`gloo-timers` in the
//! browser, none natively). The payload is re-validated the way a real API
//! would, and rejected payloads map to the generic user-facing messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use std::time::Duration;

use thiserror::Error;

use crate::util::forms::{LoginForm, RegisterForm, validate_login, validate_register};

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1_500;
pub const DEFAULT_REGISTER_DELAY_MS: u64 = 2_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    LoginRejected,
    #[error("Registration failed. This email may already be in use.")]
    RegistrationRejected,
}

/// Simulated latency per request kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    pub login_delay: Duration,
    pub register_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            register_delay: Duration::from_millis(DEFAULT_REGISTER_DELAY_MS),
        }
    }
}

/// Pretend to sign in.
pub async fn simulate_login(config: AuthConfig, form: &LoginForm) -> Result<(), AuthError> {
    simulated_latency(config.login_delay).await;
    log::info!("login attempt: email={}", form.email);
    validate_login(form).map_err(|errors| {
        log::warn!("login rejected: {} invalid field(s)", errors.len());
        AuthError::LoginRejected
    })
}

/// Pretend to create an account.
pub async fn simulate_register(config: AuthConfig, form: &RegisterForm) -> Result<(), AuthError> {
    simulated_latency(config.register_delay).await;
    log::info!("registration attempt: email={} accepted_terms={}", form.email, form.accept_terms);
    validate_register(form).map_err(|errors| {
        log::warn!("registration rejected: {} invalid field(s)", errors.len());
        AuthError::RegistrationRejected
    })
}

async fn simulated_latency(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("skipping simulated latency of {delay:?}");
    }
}
