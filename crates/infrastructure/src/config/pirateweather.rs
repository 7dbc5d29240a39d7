//! Forecast location and sensor configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use application::{SensorRegistry, SensorSetup};
use domain::{GeoLocation, Language, RoundingPolicy, Timezone, UnitSystem};
use integration_pirateweather::{ClientConfig, DEFAULT_ENDPOINT, ForecastRequest};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{ConfigError, default_true};

/// Shortest accepted polling interval
pub const MIN_SCAN_INTERVAL_SECS: u64 = 60;

/// Longest forecast day offset (today is day 0)
pub const MAX_FORECAST_DAY: i64 = 7;

/// Longest forecast hour offset with the extended hourly block
pub const MAX_FORECAST_HOUR: i64 = 167;

/// Platforms that can be set up for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Sensor,
    Weather,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor => write!(f, "sensor"),
            Self::Weather => write!(f, "weather"),
        }
    }
}

/// Raw `[pirateweather]` section as read from file and environment
#[derive(Clone, Serialize, Deserialize)]
pub struct PirateWeatherConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Display name prefix (default: Pirate Weather)
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// Unit system: si, us, ca, uk or uk2 (default: us)
    #[serde(default = "default_units")]
    pub units: String,

    /// Summary language (default: en)
    #[serde(default = "default_language")]
    pub language: String,

    /// Polling interval in seconds (default: 1200, minimum: 60)
    #[serde(default = "default_scan_interval")]
    pub scan_interval_secs: u64,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (default: 30, accepted: 1-60)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Response schema version (default: 2)
    #[serde(default = "default_api_version")]
    pub api_version: u8,

    /// Request 168 hourly points instead of 48
    #[serde(default = "default_true")]
    pub extend_hourly: bool,

    /// Request the twelve-hour day/night block
    #[serde(default = "default_true")]
    pub include_day_night: bool,

    /// Upstream models to leave out of the blend
    #[serde(default)]
    pub models_exclude: Vec<String>,

    /// Sensor keys to create entities for
    #[serde(default)]
    pub monitored_conditions: Vec<String>,

    /// Day offsets for daily sensors
    #[serde(default)]
    pub forecast_days: Vec<i64>,

    /// Hour offsets for hourly sensors
    #[serde(default)]
    pub forecast_hours: Vec<i64>,

    /// Whole-number output instead of two decimals
    #[serde(default)]
    pub round_output: bool,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    /// IANA zone used to localise alert times (default: UTC)
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl fmt::Debug for PirateWeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PirateWeatherConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("name", &self.name)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("units", &self.units)
            .field("language", &self.language)
            .field("scan_interval_secs", &self.scan_interval_secs)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_version", &self.api_version)
            .field("extend_hourly", &self.extend_hourly)
            .field("include_day_night", &self.include_day_night)
            .field("models_exclude", &self.models_exclude)
            .field("monitored_conditions", &self.monitored_conditions)
            .field("forecast_days", &self.forecast_days)
            .field("forecast_hours", &self.forecast_hours)
            .field("round_output", &self.round_output)
            .field("platforms", &self.platforms)
            .field("timezone", &self.timezone)
            .finish()
    }
}

fn default_name() -> String {
    "Pirate Weather".to_string()
}

fn default_units() -> String {
    "us".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_scan_interval() -> u64 {
    1200
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

fn default_platforms() -> Vec<Platform> {
    vec![Platform::Sensor, Platform::Weather]
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for PirateWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            name: default_name(),
            latitude: None,
            longitude: None,
            units: default_units(),
            language: default_language(),
            scan_interval_secs: default_scan_interval(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            api_version: default_api_version(),
            extend_hourly: true,
            include_day_night: true,
            models_exclude: Vec::new(),
            monitored_conditions: Vec::new(),
            forecast_days: Vec::new(),
            forecast_hours: Vec::new(),
            round_output: false,
            platforms: default_platforms(),
            timezone: default_timezone(),
        }
    }
}

impl PirateWeatherConfig {
    /// Check every field and convert it into domain values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a missing key or location, values outside
    /// their accepted range, unknown monitored conditions and anything the
    /// domain value objects reject.
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::Missing("pirateweather.api_key"))?;
        let latitude = self
            .latitude
            .ok_or(ConfigError::Missing("pirateweather.latitude"))?;
        let longitude = self
            .longitude
            .ok_or(ConfigError::Missing("pirateweather.longitude"))?;
        let location = GeoLocation::new(latitude, longitude)?;

        if self.scan_interval_secs < MIN_SCAN_INTERVAL_SECS {
            return Err(ConfigError::Invalid {
                field: "pirateweather.scan_interval_secs",
                message: format!(
                    "{} is below the minimum of {MIN_SCAN_INTERVAL_SECS} seconds",
                    self.scan_interval_secs
                ),
            });
        }
        if !(1..=60).contains(&self.timeout_secs) {
            return Err(ConfigError::Invalid {
                field: "pirateweather.timeout_secs",
                message: format!("{} is outside 1-60 seconds", self.timeout_secs),
            });
        }

        let registry = SensorRegistry::standard();
        if let Some(unknown) = self
            .monitored_conditions
            .iter()
            .find(|key| !registry.contains(key))
        {
            return Err(ConfigError::Invalid {
                field: "pirateweather.monitored_conditions",
                message: format!("unknown condition {unknown}"),
            });
        }

        let forecast_days = offsets(
            "pirateweather.forecast_days",
            &self.forecast_days,
            MAX_FORECAST_DAY,
        )?;
        let forecast_hours = offsets(
            "pirateweather.forecast_hours",
            &self.forecast_hours,
            MAX_FORECAST_HOUR,
        )?;

        Ok(Settings {
            api_key,
            entry_id: format!("{latitude}-{longitude}"),
            name: self.name.clone(),
            location,
            units: UnitSystem::from_str(&self.units)?,
            language: Language::new(&self.language)?,
            scan_interval: Duration::from_secs(self.scan_interval_secs),
            client: ClientConfig {
                endpoint: self.endpoint.clone(),
                timeout_secs: self.timeout_secs,
                api_version: self.api_version,
                extend_hourly: self.extend_hourly,
                include_day_night: self.include_day_night,
            },
            models_exclude: self.models_exclude.clone(),
            monitored_conditions: dedup_keys(&self.monitored_conditions),
            forecast_days,
            forecast_hours,
            rounding: RoundingPolicy::from_flag(self.round_output),
            platforms: self.platforms.clone(),
            timezone: Timezone::new(&self.timezone)?,
        })
    }
}

/// Range-check offsets, keeping the first occurrence of each
fn offsets(field: &'static str, values: &[i64], max: i64) -> Result<Vec<usize>, ConfigError> {
    let mut checked = Vec::with_capacity(values.len());
    for &value in values {
        if !(0..=max).contains(&value) {
            return Err(ConfigError::Invalid {
                field,
                message: format!("{value} is outside 0-{max}"),
            });
        }
        let offset = usize::try_from(value).map_err(|e| ConfigError::Invalid {
            field,
            message: e.to_string(),
        })?;
        if !checked.contains(&offset) {
            checked.push(offset);
        }
    }
    Ok(checked)
}

fn dedup_keys(keys: &[String]) -> Vec<String> {
    keys.iter().fold(Vec::new(), |mut acc, key| {
        if !acc.contains(key) {
            acc.push(key.clone());
        }
        acc
    })
}

/// Validated configuration of one forecast location
#[derive(Clone)]
pub struct Settings {
    pub api_key: SecretString,
    /// Prefix of every entity unique id
    pub entry_id: String,
    pub name: String,
    pub location: GeoLocation,
    pub units: UnitSystem,
    pub language: Language,
    pub scan_interval: Duration,
    pub client: ClientConfig,
    pub models_exclude: Vec<String>,
    pub monitored_conditions: Vec<String>,
    pub forecast_days: Vec<usize>,
    pub forecast_hours: Vec<usize>,
    pub rounding: RoundingPolicy,
    pub platforms: Vec<Platform>,
    pub timezone: Timezone,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"[REDACTED]")
            .field("entry_id", &self.entry_id)
            .field("name", &self.name)
            .field("location", &self.location)
            .field("units", &self.units)
            .field("language", &self.language)
            .field("scan_interval", &self.scan_interval)
            .field("client", &self.client)
            .field("models_exclude", &self.models_exclude)
            .field("monitored_conditions", &self.monitored_conditions)
            .field("forecast_days", &self.forecast_days)
            .field("forecast_hours", &self.forecast_hours)
            .field("rounding", &self.rounding)
            .field("platforms", &self.platforms)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl Settings {
    #[must_use]
    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Request for the given unit system at the configured location
    #[must_use]
    pub fn forecast_request(&self, units: UnitSystem) -> ForecastRequest {
        ForecastRequest::new(self.api_key.expose_secret(), self.location)
            .with_units(units)
            .with_language(self.language.clone())
            .with_exclude(&self.models_exclude)
    }

    #[must_use]
    pub fn sensor_setup(&self) -> SensorSetup {
        SensorSetup {
            entry_id: self.entry_id.clone(),
            client_name: self.name.clone(),
            monitored_conditions: self.monitored_conditions.clone(),
            forecast_days: self.forecast_days.clone(),
            forecast_hours: self.forecast_hours.clone(),
            units: self.units,
            rounding: self.rounding,
            timezone: self.timezone,
        }
    }
}
