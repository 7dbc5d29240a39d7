//! Native weather entity
//!
//! Reads the same published forecast as the sensors. Forecasts for this
//! entity are requested in SI units, so no conversion happens here.

use domain::{DataBlock, DataPoint, Forecast, RoundingPolicy, WeatherCondition};
use serde::Serialize;

use super::conversions::round_to;
use super::sensor_entity::ATTRIBUTION;
use super::state::{SensorValue, round_reading};
use super::update_coordinator::UpdateCoordinator;

/// Native units of every weather entity value
pub mod native_units {
    pub const TEMPERATURE: &str = "°C";
    pub const PRESSURE: &str = "mbar";
    pub const WIND_SPEED: &str = "m/s";
    pub const VISIBILITY: &str = "km";
    pub const PRECIPITATION: &str = "mm";
}

/// Current conditions as shown by the weather entity
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub condition: Option<WeatherCondition>,
    pub temperature: Option<SensorValue>,
    pub apparent_temperature: Option<SensorValue>,
    pub dew_point: Option<SensorValue>,
    pub humidity: Option<SensorValue>,
    pub pressure: Option<SensorValue>,
    pub wind_speed: Option<SensorValue>,
    pub wind_gust_speed: Option<SensorValue>,
    pub wind_bearing: Option<f64>,
    pub visibility: Option<SensorValue>,
    pub ozone: Option<SensorValue>,
    pub cloud_coverage: Option<SensorValue>,
    pub uv_index: Option<SensorValue>,
}

/// One entry of a daily, hourly or twice-daily forecast
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// RFC 3339, UTC
    pub datetime: Option<String>,
    pub condition: Option<WeatherCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_daytime: Option<bool>,
    pub native_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_templow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_apparent_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_dew_point: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_pressure: Option<f64>,
    pub native_precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub humidity: Option<f64>,
    pub cloud_coverage: Option<f64>,
    pub native_wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_wind_gust_speed: Option<f64>,
    pub wind_bearing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_index: Option<f64>,
}

/// The weather entity of one configured location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherEntity {
    name: String,
    unique_id: String,
    rounding: RoundingPolicy,
}

impl WeatherEntity {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unique_id: impl Into<String>,
        rounding: RoundingPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            unique_id: unique_id.into(),
            rounding,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    #[must_use]
    pub const fn attribution(&self) -> &'static str {
        ATTRIBUTION
    }

    #[must_use]
    pub fn available(&self, coordinator: &UpdateCoordinator) -> bool {
        coordinator.data().is_some() && coordinator.last_update_success()
    }

    #[must_use]
    pub fn condition(&self, forecast: &Forecast) -> Option<WeatherCondition> {
        forecast.currently().icon().and_then(WeatherCondition::from_icon)
    }

    /// Current conditions, rounded per the entity's policy
    #[must_use]
    pub fn current(&self, forecast: &Forecast) -> CurrentConditions {
        let now = forecast.currently();
        let scalar = |key: &str| round_reading(now.reading(key), self.rounding);
        let percent = |key: &str| round_reading(now.reading(key).map(|v| v * 100.0), self.rounding);

        CurrentConditions {
            condition: self.condition(forecast),
            temperature: scalar("temperature"),
            apparent_temperature: scalar("apparentTemperature"),
            dew_point: scalar("dewPoint"),
            humidity: percent("humidity"),
            pressure: scalar("pressure"),
            wind_speed: scalar("windSpeed"),
            wind_gust_speed: scalar("windGust"),
            wind_bearing: now.reading("windBearing"),
            visibility: scalar("visibility"),
            ozone: scalar("ozone"),
            cloud_coverage: percent("cloudCover"),
            uv_index: scalar("uvIndex"),
        }
    }

    /// Daily forecast; `None` when the series is empty
    #[must_use]
    pub fn daily_forecast(&self, forecast: &Forecast) -> Option<Vec<ForecastEntry>> {
        map_series(&forecast.daily(), |_, point| map_daily_entry(point))
    }

    /// Hourly forecast; `None` when the series is empty
    #[must_use]
    pub fn hourly_forecast(&self, forecast: &Forecast) -> Option<Vec<ForecastEntry>> {
        map_series(&forecast.hourly(), |_, point| map_hourly_entry(point))
    }

    /// Day and night periods from the `day_night` block
    ///
    /// Daytime comes from the point's `isDaytime` flag, else its icon
    /// suffix, else alternates starting with day.
    #[must_use]
    pub fn twice_daily_forecast(&self, forecast: &Forecast) -> Option<Vec<ForecastEntry>> {
        map_series(&forecast.day_night(), |index, point| {
            let hint = point
                .get("isDaytime")
                .and_then(serde_json::Value::as_bool);
            let mut entry = map_day_night_entry(point, hint);
            if entry.is_daytime.is_none() {
                entry.is_daytime = Some(index % 2 == 0);
            }
            entry
        })
    }
}

fn map_series(
    block: &DataBlock,
    map: impl Fn(usize, &DataPoint) -> ForecastEntry,
) -> Option<Vec<ForecastEntry>> {
    if block.is_empty() {
        return None;
    }
    Some(
        block
            .data
            .iter()
            .enumerate()
            .map(|(index, point)| map(index, point))
            .collect(),
    )
}

fn scaled(point: &DataPoint, key: &str, factor: f64, decimals: u32) -> Option<f64> {
    point.reading(key).map(|v| round_to(v * factor, decimals))
}

fn base_entry(point: &DataPoint) -> ForecastEntry {
    ForecastEntry {
        datetime: point.time().map(|t| t.to_rfc3339()),
        condition: point.icon().and_then(WeatherCondition::from_icon),
        precipitation_probability: scaled(point, "precipProbability", 100.0, 0),
        humidity: scaled(point, "humidity", 100.0, 2),
        cloud_coverage: scaled(point, "cloudCover", 100.0, 0),
        native_wind_speed: scaled(point, "windSpeed", 1.0, 2),
        native_wind_gust_speed: scaled(point, "windGust", 1.0, 2),
        wind_bearing: scaled(point, "windBearing", 1.0, 0),
        uv_index: scaled(point, "uvIndex", 1.0, 2),
        ..ForecastEntry::default()
    }
}

/// Map one daily point
///
/// Accumulation arrives in centimetres and is reported in millimetres.
#[must_use]
pub fn map_daily_entry(point: &DataPoint) -> ForecastEntry {
    ForecastEntry {
        native_temperature: point.reading("temperatureHigh"),
        native_templow: point.reading("temperatureLow"),
        native_precipitation: point.reading("precipAccumulation").map(|cm| cm * 10.0),
        ..base_entry(point)
    }
}

/// Map one hourly point
#[must_use]
pub fn map_hourly_entry(point: &DataPoint) -> ForecastEntry {
    ForecastEntry {
        native_temperature: point.reading("temperature"),
        native_apparent_temperature: point.reading("apparentTemperature"),
        native_dew_point: point.reading("dewPoint"),
        native_pressure: point.reading("pressure"),
        native_precipitation: scaled(point, "precipIntensity", 1.0, 2),
        ..base_entry(point)
    }
}

/// Map one day/night period
///
/// `hint` wins when given; otherwise a `-day`/`-night` icon suffix decides.
#[must_use]
pub fn map_day_night_entry(point: &DataPoint, hint: Option<bool>) -> ForecastEntry {
    let from_icon = point.icon().and_then(|icon| {
        if icon.ends_with("-day") {
            Some(true)
        } else if icon.ends_with("-night") {
            Some(false)
        } else {
            None
        }
    });
    ForecastEntry {
        is_daytime: hint.or(from_icon),
        native_temperature: point.reading("temperature"),
        native_apparent_temperature: point.reading("apparentTemperature"),
        native_dew_point: point.reading("dewPoint"),
        native_pressure: point.reading("pressure"),
        native_precipitation: point.reading("precipAccumulation").map(|cm| cm * 10.0),
        ..base_entry(point)
    }
}
