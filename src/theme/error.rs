//! Errors raised by persistence backends.
//!
//! These never cross the publisher boundary: the publisher logs them and
//! keeps its in-memory value authoritative.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("{backend} is unavailable")]
    Unavailable { backend: &'static str },
    #[error("{backend} read failed: {reason}")]
    ReadFailed { backend: &'static str, reason: String },
    #[error("{backend} rejected write: {reason}")]
    WriteRejected { backend: &'static str, reason: String },
}
