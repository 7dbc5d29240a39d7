//! Pirate Weather HTTP client

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use domain::{BlockName, Forecast, GeoLocation, Language, ResponseMeta, UnitSystem};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::ForecastError;

/// Public Pirate Weather endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.pirateweather.net";

/// Blocks that can be pulled individually when missing from a response
const FETCHABLE_BLOCKS: [BlockName; 6] = [
    BlockName::Minutely,
    BlockName::Currently,
    BlockName::Hourly,
    BlockName::Daily,
    BlockName::Flags,
    BlockName::DayNight,
];

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (default: <https://api.pirateweather.net>)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Response schema version (default: 2)
    #[serde(default = "default_api_version")]
    pub api_version: u8,

    /// Request 168 hours instead of 48 (default: true)
    #[serde(default = "default_true")]
    pub extend_hourly: bool,

    /// Request the twelve-hour `day_night` block (default: true)
    #[serde(default = "default_true")]
    pub include_day_night: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_api_version() -> u8 {
    2
}

const fn default_true() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            api_version: default_api_version(),
            extend_hourly: true,
            include_day_night: true,
        }
    }
}

/// Parameters of one forecast request
#[derive(Clone)]
pub struct ForecastRequest {
    pub api_key: String,
    pub location: GeoLocation,
    pub units: UnitSystem,
    pub language: Language,
    /// Comma-joined upstream model names to skip
    pub exclude: Option<String>,
}

impl ForecastRequest {
    #[must_use]
    pub fn new(api_key: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            api_key: api_key.into(),
            location,
            units: UnitSystem::default(),
            language: Language::default(),
            exclude: None,
        }
    }

    #[must_use]
    pub const fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Skip the given upstream models; an empty list clears the exclusion
    #[must_use]
    pub fn with_exclude<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = models
            .into_iter()
            .map(|m| m.as_ref().trim().to_string())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.exclude = (!joined.is_empty()).then_some(joined);
        self
    }
}

impl fmt::Debug for ForecastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastRequest")
            .field("api_key", &"[REDACTED]")
            .field("location", &self.location)
            .field("units", &self.units)
            .field("language", &self.language)
            .field("exclude", &self.exclude)
            .finish()
    }
}

/// Replace the key path segment of a forecast URL for logging
#[must_use]
pub fn redact_api_key(url: &str) -> String {
    const MARKER: &str = "/forecast/";
    let Some(start) = url.find(MARKER).map(|i| i + MARKER.len()) else {
        return url.to_string();
    };
    let end = url[start..].find('/').map_or(url.len(), |i| start + i);
    format!("{}[REDACTED]{}", &url[..start], &url[end..])
}

/// Forecast API operations
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch a fresh forecast
    async fn fetch(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError>;

    /// Re-request the URL the forecast was built from and replace its payload
    async fn update(&self, forecast: &mut Forecast) -> Result<(), ForecastError>;

    /// Pull a block that is absent from `forecast` and splice it in
    ///
    /// Returns `Ok(false)` when the block was already present or the
    /// upstream still does not provide it.
    async fn fetch_missing_block(
        &self,
        forecast: &mut Forecast,
        block: BlockName,
    ) -> Result<bool, ForecastError>;
}

/// reqwest-based forecast client
#[derive(Debug)]
pub struct PirateWeatherClient {
    client: Client,
    config: ClientConfig,
}

impl PirateWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ClientInit(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ForecastError> {
        Self::new(ClientConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the forecast URL by concatenation
    ///
    /// `{endpoint}/forecast/{key}/{lat},{lon}?units=..&extend=hourly&version=..&lang=..`
    /// followed by the optional `exclude` and `include` parameters.
    #[must_use]
    pub fn build_forecast_url(&self, request: &ForecastRequest) -> String {
        let mut url = format!(
            "{}/forecast/{}/{}?units={}",
            self.config.endpoint.trim_end_matches('/'),
            request.api_key,
            request.location.path_segment(),
            request.units,
        );
        if self.config.extend_hourly {
            url.push_str("&extend=hourly");
        }
        url.push_str(&format!("&version={}", self.config.api_version));
        url.push_str(&format!("&lang={}", request.language));
        if let Some(exclude) = &request.exclude {
            url.push_str(&format!("&exclude={exclude}"));
        }
        if self.config.include_day_night {
            url.push_str("&include=day_night_forecast");
        }
        url
    }

    /// URL that pulls only `block` from the same location and units
    fn missing_block_url(source_url: &str, block: BlockName) -> String {
        let base = source_url.split('&').next().unwrap_or(source_url);
        let others = FETCHABLE_BLOCKS
            .iter()
            .filter(|b| **b != block)
            .map(BlockName::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!("{base}&exclude={others},alerts")
    }

    /// The request URL carries the API key, so it is stripped from the error
    fn map_send_error(e: reqwest::Error) -> ForecastError {
        let e = e.without_url();
        if e.is_timeout() {
            ForecastError::Transport(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ForecastError::Transport(format!("connection failed: {e}"))
        } else {
            ForecastError::Transport(e.to_string())
        }
    }

    /// Perform one GET and decode the body into a JSON object
    async fn get_json(&self, url: &str) -> Result<(Value, ResponseMeta), ForecastError> {
        debug!(url = %redact_api_key(url), "Requesting forecast");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        debug!(status = %status, "Received forecast response");

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ForecastError::InvalidApiKey);
        }
        if !status.is_success() {
            return Err(ForecastError::Upstream {
                status: status.as_u16(),
            });
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect::<BTreeMap<_, _>>();

        let text = response
            .text()
            .await
            .map_err(Self::map_send_error)?;

        let body: Value =
            serde_json::from_str(&text).map_err(|e| ForecastError::Parse(e.to_string()))?;
        if !body.is_object() {
            return Err(ForecastError::Parse(
                "expected a JSON object at the top level".to_string(),
            ));
        }

        let meta = ResponseMeta {
            url: url.to_string(),
            status: status.as_u16(),
            headers,
        };
        Ok((body, meta))
    }
}

#[async_trait]
impl ForecastClient for PirateWeatherClient {
    #[instrument(skip(self, request), fields(location = %request.location, units = %request.units))]
    async fn fetch(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
        let url = self.build_forecast_url(request);
        let (body, meta) = self.get_json(&url).await?;
        Ok(Forecast::new(body, meta))
    }

    #[instrument(skip(self, forecast))]
    async fn update(&self, forecast: &mut Forecast) -> Result<(), ForecastError> {
        let url = forecast.response().url.clone();
        if url.is_empty() {
            return Err(ForecastError::Parse(
                "forecast has no source URL to refresh from".to_string(),
            ));
        }
        let (body, meta) = self.get_json(&url).await?;
        forecast.replace_payload(body, meta);
        Ok(())
    }

    #[instrument(skip(self, forecast), fields(block = %block))]
    async fn fetch_missing_block(
        &self,
        forecast: &mut Forecast,
        block: BlockName,
    ) -> Result<bool, ForecastError> {
        if forecast.has_block(block) || !FETCHABLE_BLOCKS.contains(&block) {
            return Ok(false);
        }

        let url = Self::missing_block_url(&forecast.response().url, block);
        let (mut body, _) = self.get_json(&url).await?;

        match body.get_mut(block.as_str()).map(Value::take) {
            Some(value) if !value.is_null() => {
                forecast.insert_block(block, value);
                Ok(true)
            },
            _ => {
                warn!(block = %block, "Upstream did not return the requested block");
                Ok(false)
            },
        }
    }
}
