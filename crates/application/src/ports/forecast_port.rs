//! Forecast source port
//!
//! Defines the interface the update coordinator refreshes through.

use async_trait::async_trait;
use domain::Forecast;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for retrieving forecasts for the configured location
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch a complete forecast
    ///
    /// Implementations must not publish anything themselves; the caller
    /// receives the fully parsed forecast or an error.
    async fn fetch_forecast(&self) -> Result<Forecast, ApplicationError>;
}
