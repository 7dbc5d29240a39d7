//! Forecast client errors

use thiserror::Error;

/// Failures of a single forecast round trip
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// HTTP 403: key unknown or not subscribed
    #[error("Invalid API key or API key not subscribed to the Pirate Weather API")]
    InvalidApiKey,

    /// Any other non-2xx status
    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16 },

    /// Timeout, connection failure or DNS failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body was not a JSON object
    #[error("Parse error: {0}")]
    Parse(String),

    /// The HTTP client could not be built
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl ForecastError {
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidApiKey)
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidApiKey => Some(403),
            Self::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_classification() {
        assert!(ForecastError::InvalidApiKey.is_authentication());
        assert!(!ForecastError::Upstream { status: 500 }.is_authentication());
        assert!(!ForecastError::Transport("timeout".into()).is_authentication());
    }

    #[test]
    fn test_status() {
        assert_eq!(ForecastError::InvalidApiKey.status(), Some(403));
        assert_eq!(ForecastError::Upstream { status: 502 }.status(), Some(502));
        assert_eq!(ForecastError::Parse("x".into()).status(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ForecastError::Upstream { status: 404 }.to_string(),
            "Upstream returned HTTP 404"
        );
        assert!(
            ForecastError::InvalidApiKey
                .to_string()
                .contains("not subscribed")
        );
    }
}
