//! Error handling for the MetaNutri core.

use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty or a stored record failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation referenced a meal, line item or food that does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A numeric argument was out of range (negative quantity, zero goal).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A meal was marked completed/failed before its scheduled time.
    #[error("meal {meal} cannot change status before {scheduled}")]
    Ineligible { meal: String, scheduled: NaiveTime },

    /// Profile store failures outside of I/O and serialization.
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON serialization or deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem errors from the file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new validation error.
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new invalid-argument error.
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Create a new not-found error for the given entity kind.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create a new storage error.
    pub fn storage<T: fmt::Display>(msg: T) -> Self {
        Error::Storage(msg.to_string())
    }
}
