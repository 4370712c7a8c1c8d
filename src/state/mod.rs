//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dashboard`) so components depend on
//! small focused models. Display preference lives in `crate::theme`.

pub mod auth;
pub mod dashboard;
