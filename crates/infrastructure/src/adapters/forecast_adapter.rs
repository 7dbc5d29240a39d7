//! Forecast adapter - Implements ForecastPort using integration_pirateweather

use application::{ApplicationError, ForecastPort};
use async_trait::async_trait;
use domain::{BlockName, Forecast};
use integration_pirateweather::{
    ClientConfig, ForecastClient, ForecastError, ForecastRequest, PirateWeatherClient,
};
use tracing::{debug, instrument, warn};

/// Adapter fetching one configured location from the Pirate Weather API
pub struct ForecastAdapter {
    client: PirateWeatherClient,
    request: ForecastRequest,
    required_blocks: Vec<BlockName>,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"PirateWeatherClient")
            .field("request", &self.request)
            .field("required_blocks", &self.required_blocks)
            .finish()
    }
}

impl ForecastAdapter {
    /// Create an adapter for the given client settings and request
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: ClientConfig, request: ForecastRequest) -> Result<Self, ApplicationError> {
        let client = PirateWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client,
            request,
            required_blocks: Vec::new(),
        })
    }

    /// Blocks to pull individually when the main response lacks them
    #[must_use]
    pub fn with_required_blocks(mut self, blocks: impl IntoIterator<Item = BlockName>) -> Self {
        self.required_blocks = blocks.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn request(&self) -> &ForecastRequest {
        &self.request
    }

    /// Map integration forecast error to application error
    fn map_error(err: ForecastError) -> ApplicationError {
        match err {
            ForecastError::InvalidApiKey => ApplicationError::Authentication(err.to_string()),
            ForecastError::Upstream { status } => ApplicationError::Upstream {
                status,
                message: err.to_string(),
            },
            ForecastError::Transport(e) => ApplicationError::Transport(e),
            ForecastError::Parse(e) => {
                ApplicationError::Transport(format!("malformed forecast response: {e}"))
            },
            ForecastError::ClientInit(e) => ApplicationError::Internal(e),
        }
    }

    /// Splice in required blocks the response did not carry
    ///
    /// A failed block fetch leaves the forecast as it is.
    async fn fill_missing_blocks(&self, forecast: &mut Forecast) {
        for block in &self.required_blocks {
            if forecast.has_block(*block) {
                continue;
            }
            match self.client.fetch_missing_block(forecast, *block).await {
                Ok(added) => debug!(block = %block, added, "Fetched missing block"),
                Err(e) => warn!(block = %block, error = %e, "Failed to fetch missing block"),
            }
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(
        skip(self),
        fields(location = %self.request.location, units = %self.request.units)
    )]
    async fn fetch_forecast(&self) -> Result<Forecast, ApplicationError> {
        let result = self
            .client
            .fetch(&self.request)
            .await
            .map_err(Self::map_error);

        match result {
            Ok(mut forecast) => {
                self.fill_missing_blocks(&mut forecast).await;
                debug!(
                    hourly = forecast.hourly().len(),
                    daily = forecast.daily().len(),
                    "Retrieved forecast"
                );
                Ok(forecast)
            },
            Err(e) => {
                debug!(error = %e, "Failed to retrieve forecast");
                Err(e)
            },
        }
    }
}
