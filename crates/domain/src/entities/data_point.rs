//! A single time-indexed record from a forecast series

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw value the API uses for "not available for this model/location"
pub const MISSING_VALUE: f64 = -999.0;

/// Returns true when `value` is exactly the missing-value sentinel
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_missing(value: f64) -> bool {
    value == MISSING_VALUE
}

/// One instant's or one day's worth of raw weather fields
///
/// Lookups never fail: absent keys and values of the wrong JSON type resolve
/// to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint {
    fields: Map<String, Value>,
}

impl DataPoint {
    /// Wrap a JSON value; anything other than an object becomes an empty point
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self { fields: map.clone() },
            _ => Self::empty(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw JSON value for an API (camelCase) key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Numeric value for a key
    ///
    /// The sentinel is returned as-is; callers decide how to treat it.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Numeric value with the missing-value sentinel mapped to `None`
    #[must_use]
    pub fn reading(&self, key: &str) -> Option<f64> {
        self.number(key).filter(|v| !is_missing(*v))
    }

    /// String value for a key
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Unix-seconds field decoded as a UTC timestamp
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let secs = self.reading(key)?;
        DateTime::from_timestamp(secs as i64, 0)
    }

    /// Raw `time` as unix seconds
    #[must_use]
    pub fn unix_time(&self) -> Option<i64> {
        self.get("time").and_then(Value::as_i64)
    }

    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.timestamp("time")
    }

    #[must_use]
    pub fn sunrise_time(&self) -> Option<DateTime<Utc>> {
        self.timestamp("sunriseTime")
    }

    #[must_use]
    pub fn sunset_time(&self) -> Option<DateTime<Utc>> {
        self.timestamp("sunsetTime")
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.text("summary")
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.text("icon")
    }

    /// All raw fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
