//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Setup input is malformed or missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The forecast API rejected the key (HTTP 403)
    #[error("{0}")]
    Authentication(String),

    /// The forecast API answered with a non-success status
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Timeout, connection failure or unreadable body
    #[error("Transport error: {0}")]
    Transport(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::Upstream { .. } | ApplicationError::Transport(_)
        )
    }

    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, ApplicationError::Authentication(_))
    }
}
