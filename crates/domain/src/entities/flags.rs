//! Forecast provenance metadata

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `flags` block of a forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagsBlock {
    fields: Map<String, Value>,
}

impl FlagsBlock {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                fields: map.clone(),
            },
            _ => Self::default(),
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Unit system the upstream used for this response
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.text("units")
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.text("version")
    }

    /// Distance to the nearest station
    #[must_use]
    pub fn nearest_station(&self) -> Option<f64> {
        self.fields.get("nearest-station").and_then(Value::as_f64)
    }

    /// Upstream models that contributed to this forecast
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        self.fields
            .get("sources")
            .and_then(Value::as_array)
            .map(|s| s.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn source_times(&self) -> Option<&Map<String, Value>> {
        self.fields.get("sourceTimes").and_then(Value::as_object)
    }

    /// Raw `sourceTimes` entry for a model
    #[must_use]
    pub fn source_time_raw(&self, key: &str) -> Option<&str> {
        self.source_times()?.get(key).and_then(Value::as_str)
    }

    /// Model run time for `key`, parsed from the `YYYY-MM-DD HHZ` format
    #[must_use]
    pub fn source_time(&self, key: &str) -> Option<DateTime<Utc>> {
        self.source_time_raw(key).and_then(parse_source_time)
    }

    #[must_use]
    pub fn process_time(&self) -> Option<f64> {
        self.fields.get("processTime").and_then(Value::as_f64)
    }

    #[must_use]
    pub fn ingest_version(&self) -> Option<&str> {
        self.text("ingestVersion")
    }

    #[must_use]
    pub fn nearest_city(&self) -> Option<&str> {
        self.text("nearestCity")
    }

    #[must_use]
    pub fn nearest_country(&self) -> Option<&str> {
        self.text("nearestCountry")
    }

    #[must_use]
    pub fn nearest_sub_national(&self) -> Option<&str> {
        self.text("nearestSubNational")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse a model run time such as `2024-05-01 06Z`
#[must_use]
pub fn parse_source_time(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim().strip_suffix('Z')?;
    let (date, hour) = trimmed.split_once(' ')?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let hour: u32 = hour.trim().parse().ok()?;
    date.and_hms_opt(hour, 0, 0).map(|naive| naive.and_utc())
}
