//! Request helpers. The app has no backend, so every call here is simulated.

pub mod auth_api;
