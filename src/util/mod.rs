//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic (validation, scoring, route guards) lives here so it can be
//! tested without a browser.

pub mod auth;
pub mod forms;
pub mod password;
