//! Application configuration
//!
//! Layered the usual way: built-in defaults, then an optional `config.toml`
//! (or an explicit path), then `PIRATEWEATHER_` environment variables with
//! `__` between nested keys, e.g. `PIRATEWEATHER_PIRATEWEATHER__API_KEY`.
//! List settings accept comma-separated values from the environment.

mod pirateweather;

use std::path::Path;

use application::ApplicationError;
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use pirateweather::{
    MAX_FORECAST_DAY, MAX_FORECAST_HOUR, MIN_SCAN_INTERVAL_SECS, Platform, PirateWeatherConfig,
    Settings,
};

use crate::telemetry::TelemetryConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "PIRATEWEATHER";

/// Keys whose environment values are split on commas
const LIST_KEYS: [&str; 5] = [
    "pirateweather.models_exclude",
    "pirateweather.monitored_conditions",
    "pirateweather.forecast_days",
    "pirateweather.forecast_hours",
    "pirateweather.platforms",
];

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File or environment could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required setting has no value
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    /// A setting is outside its accepted values
    #[error("Invalid setting {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    /// A value object rejected the setting
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ConfigError> for ApplicationError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pirateweather: PirateWeatherConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load from `config.toml` in the working directory, if present, and
    /// the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load from an explicit file, which must exist, and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file is missing or a source cannot
    /// be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let environment = LIST_KEYS.iter().fold(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .try_parsing(true),
            |env, key| env.with_list_parse_key(key),
        );

        let config = config::Config::builder()
            .set_default("telemetry.log_filter", crate::telemetry::DEFAULT_LOG_FILTER)?
            .add_source(file)
            .add_source(environment)
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(config = ?app_config, "Configuration loaded");
        Ok(app_config)
    }

    /// Validate the forecast section into ready-to-use settings
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        self.pirateweather.validate()
    }
}
