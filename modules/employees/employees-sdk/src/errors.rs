//! Public error types for the `employees` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `EmployeesClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeesError {
    /// Employee with the specified ID was not found.
    #[error("Employee with id {id} not found")]
    NotFound { id: String },

    /// The upstream employee service signalled overload.
    #[error("Employee service busy: {message}")]
    RateLimited { message: String },

    /// The upstream employee service failed after all retry attempts.
    #[error("Employee service error (status {status:?}): {message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl EmployeesError {
    /// Create a `NotFound` error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a `RateLimited` error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Create an `Upstream` error.
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Create a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
