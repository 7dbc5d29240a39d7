//! State derivation for sensor entities
//!
//! Turns one descriptor plus the published [`Forecast`] into a presentable
//! value. Nothing here fails: absent blocks, absent fields, out-of-range
//! offsets and the `-999` sentinel all resolve to `None`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use domain::{
    BlockName, DataPoint, Forecast, RoundingPolicy, Timezone, UnitSystem, is_missing,
};
use serde::Serialize;
use serde_json::Value;

use super::alerts::flatten_alerts;
use super::conversions::{normalize, round_to};
use crate::sensors::{SensorDescriptor, ValueKind};

/// Presentable sensor state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SensorValue {
    /// Convert a raw JSON field without any rounding
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

/// Which record of the forecast a sensor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForecastOffset {
    /// The `currently` point
    #[default]
    Current,
    /// `daily.data[n]`
    Day(usize),
    /// `hourly.data[n]`
    Hour(usize),
}

/// Per-entity options fixed at setup time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateOptions {
    pub units: UnitSystem,
    pub rounding: RoundingPolicy,
    /// Zone used to render alert times
    pub timezone: Timezone,
}

/// Result of a state computation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateReading {
    pub value: Option<SensorValue>,
    /// API icon token of the data that was read (summary sensors)
    pub condition_icon: Option<String>,
    /// Extra attributes produced while reading (flattened alerts)
    pub attributes: BTreeMap<String, Value>,
}

impl StateReading {
    fn value(value: Option<SensorValue>) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Compute the state of `descriptor` against `forecast`
#[must_use]
pub fn compute_state(
    descriptor: &SensorDescriptor,
    offset: ForecastOffset,
    forecast: &Forecast,
    options: &StateOptions,
) -> StateReading {
    match descriptor.kind {
        ValueKind::Alerts => {
            let alerts = forecast.alerts();
            StateReading {
                value: Some(SensorValue::Int(
                    i64::try_from(alerts.len()).unwrap_or(i64::MAX),
                )),
                condition_icon: None,
                attributes: flatten_alerts(alerts, &options.timezone),
            }
        },
        ValueKind::ModelUpdateTime => StateReading::value(
            descriptor
                .source_key
                .and_then(|key| forecast.flags().source_time(key))
                .map(SensorValue::Timestamp),
        ),
        ValueKind::BlockSummary(block) => {
            let block = match block {
                BlockName::Minutely => forecast.minutely(),
                BlockName::Hourly => forecast.hourly(),
                BlockName::DayNight => forecast.day_night(),
                _ => forecast.daily(),
            };
            StateReading {
                value: block.summary.map(SensorValue::Text),
                condition_icon: block.icon,
                attributes: BTreeMap::new(),
            }
        },
        _ => match select_point(forecast, offset) {
            Some(point) => point_state(descriptor, offset, &point, source_units(forecast), options),
            None => StateReading::default(),
        },
    }
}

fn select_point(forecast: &Forecast, offset: ForecastOffset) -> Option<DataPoint> {
    match offset {
        ForecastOffset::Current => Some(forecast.currently()),
        ForecastOffset::Day(day) => forecast.daily().data.into_iter().nth(day),
        ForecastOffset::Hour(hour) => forecast.hourly().data.into_iter().nth(hour),
    }
}

fn source_units(forecast: &Forecast) -> Option<UnitSystem> {
    forecast.flags().units().and_then(|u| u.parse().ok())
}

fn point_state(
    descriptor: &SensorDescriptor,
    offset: ForecastOffset,
    point: &DataPoint,
    source: Option<UnitSystem>,
    options: &StateOptions,
) -> StateReading {
    if descriptor.kind == ValueKind::FireRisk {
        let key = match offset {
            ForecastOffset::Day(_) => "fireIndexMax",
            _ => "fireIndex",
        };
        let value = point
            .number(key)
            .map(|index| SensorValue::Text(fire_risk_level(index).to_string()));
        return StateReading::value(value);
    }

    let key = to_camel_case(descriptor.key);
    let Some(raw) = point.get(&key) else {
        return StateReading::default();
    };
    if raw.as_f64().is_some_and(is_missing) {
        return StateReading::default();
    }

    let rounding = options.rounding;
    let value = match descriptor.kind {
        ValueKind::Summary => {
            return StateReading {
                value: SensorValue::from_json(raw),
                condition_icon: point.icon().map(str::to_string),
                attributes: BTreeMap::new(),
            };
        },
        ValueKind::Percentage => raw
            .as_f64()
            .map(|fraction| rounded(fraction * 100.0, rounding.scalar_decimals())),
        ValueKind::Timestamp => point.timestamp(&key).map(SensorValue::Timestamp),
        ValueKind::Scalar(conversion) => raw.as_f64().map(|v| {
            rounded(
                normalize(v, conversion, source, options.units),
                rounding.scalar_decimals(),
            )
        }),
        ValueKind::Precipitation(conversion) => raw.as_f64().map(|v| {
            SensorValue::Float(round_to(
                normalize(v, conversion, source, options.units),
                rounding.precipitation_decimals(),
            ))
        }),
        _ => SensorValue::from_json(raw),
    };

    StateReading::value(value)
}

/// Round to `decimals` places; zero decimals yields an integer state
#[allow(clippy::cast_possible_truncation)]
fn rounded(value: f64, decimals: u32) -> SensorValue {
    if decimals == 0 {
        SensorValue::Int(value.round() as i64)
    } else {
        SensorValue::Float(round_to(value, decimals))
    }
}

/// Map a numeric fire index to its risk label
#[must_use]
pub fn fire_risk_level(index: f64) -> &'static str {
    if is_missing(index) {
        "N/A"
    } else if index >= 30.0 {
        "Extreme"
    } else if index >= 20.0 {
        "Very High"
    } else if index >= 10.0 {
        "High"
    } else if index >= 5.0 {
        "Moderate"
    } else {
        "Low"
    }
}

/// `precip_intensity_max` -> `precipIntensityMax`
#[must_use]
pub fn to_camel_case(snake: &str) -> String {
    let mut parts = snake.split('_');
    let mut camel = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(&chars.as_str().to_lowercase());
        }
    }
    camel
}

/// Round an optional reading with the scalar precision of `rounding`
#[must_use]
pub fn round_reading(value: Option<f64>, rounding: RoundingPolicy) -> Option<SensorValue> {
    value.map(|v| rounded(v, rounding.scalar_decimals()))
}
