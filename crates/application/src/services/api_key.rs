//! API key validation at setup time

use tracing::{error, info};

use crate::error::ApplicationError;
use crate::ports::ForecastPort;

/// Message shown when the forecast API rejects the key
pub const INVALID_API_KEY_MESSAGE: &str =
    "Invalid API key or API key not subscribed to the Pirate Weather API";

/// Check the configured key with a single forecast request
///
/// # Errors
///
/// Returns `ApplicationError::Authentication` when the key is rejected and
/// the port's error for any other failure.
pub async fn validate_api_key(port: &dyn ForecastPort) -> Result<(), ApplicationError> {
    match port.fetch_forecast().await {
        Ok(_) => {
            info!("API key accepted");
            Ok(())
        },
        Err(e) if e.is_authentication() => {
            error!("API key rejected by the forecast API");
            Err(ApplicationError::Authentication(
                INVALID_API_KEY_MESSAGE.to_string(),
            ))
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockForecastPort;
    use domain::{Forecast, ResponseMeta};

    #[tokio::test]
    async fn test_valid_key() {
        let mut port = MockForecastPort::new();
        port.expect_fetch_forecast()
            .times(1)
            .returning(|| Ok(Forecast::new(serde_json::json!({}), ResponseMeta::default())));

        assert!(validate_api_key(&port).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejected_key() {
        let mut port = MockForecastPort::new();
        port.expect_fetch_forecast()
            .returning(|| Err(ApplicationError::Authentication("403".to_string())));

        let err = validate_api_key(&port).await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_other_failures_pass_through() {
        let mut port = MockForecastPort::new();
        port.expect_fetch_forecast()
            .returning(|| Err(ApplicationError::Transport("connection refused".to_string())));

        let err = validate_api_key(&port).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Transport(_)));
    }
}
