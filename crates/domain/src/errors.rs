//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Unit system is not one of si, us, ca, uk, uk2
    #[error("Invalid unit system: {0}. Use one of si, us, ca, uk, uk2")]
    InvalidUnitSystem(String),

    /// Language code is not supported by the forecast API
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),

    /// Latitude/longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Not a known IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Rounding mode could not be parsed
    #[error("Invalid rounding mode: {0}")]
    InvalidRounding(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
