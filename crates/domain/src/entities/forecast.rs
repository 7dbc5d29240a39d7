//! Forecast facade over one API response
//!
//! Block accessors decode on every call from the stored JSON. An absent or
//! malformed block yields an empty typed value so that downstream formatting
//! treats "block absent" and "field absent" the same way.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::{Alert, DataBlock, DataPoint, FlagsBlock};

/// Top-level blocks of a forecast response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockName {
    Currently,
    Minutely,
    Hourly,
    Daily,
    DayNight,
    Flags,
    Alerts,
}

impl BlockName {
    pub const ALL: [Self; 7] = [
        Self::Currently,
        Self::Minutely,
        Self::Hourly,
        Self::Daily,
        Self::DayNight,
        Self::Flags,
        Self::Alerts,
    ];

    /// JSON key of the block
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Currently => "currently",
            Self::Minutely => "minutely",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::DayNight => "day_night",
            Self::Flags => "flags",
            Self::Alerts => "alerts",
        }
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP metadata of the response a forecast was built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Request URL, reused by `update()`
    pub url: String,
    pub status: u16,
    pub headers: BTreeMap<String, String>,
}

impl ResponseMeta {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Parsed wrapper over one forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    json: Map<String, Value>,
    response: ResponseMeta,
    alerts: Vec<Alert>,
}

impl Forecast {
    /// Build a forecast from a decoded body; the alert list is built here
    #[must_use]
    pub fn new(body: Value, response: ResponseMeta) -> Self {
        let json = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let alerts = Alert::list_from(json.get(BlockName::Alerts.as_str()));
        Self {
            json,
            response,
            alerts,
        }
    }

    fn block(&self, name: BlockName) -> Option<&Value> {
        self.json.get(name.as_str()).filter(|v| !v.is_null())
    }

    fn data_block(&self, name: BlockName) -> DataBlock {
        self.block(name)
            .map(DataBlock::from_value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn currently(&self) -> DataPoint {
        self.block(BlockName::Currently)
            .map(DataPoint::from_value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn minutely(&self) -> DataBlock {
        self.data_block(BlockName::Minutely)
    }

    #[must_use]
    pub fn hourly(&self) -> DataBlock {
        self.data_block(BlockName::Hourly)
    }

    #[must_use]
    pub fn daily(&self) -> DataBlock {
        self.data_block(BlockName::Daily)
    }

    /// Twelve-hour day/night periods
    #[must_use]
    pub fn day_night(&self) -> DataBlock {
        self.data_block(BlockName::DayNight)
    }

    #[must_use]
    pub fn flags(&self) -> FlagsBlock {
        self.block(BlockName::Flags)
            .map(FlagsBlock::from_value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Timezone offset of the location in hours
    #[must_use]
    pub fn offset(&self) -> Option<f64> {
        self.json.get("offset").and_then(Value::as_f64)
    }

    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.json.get("timezone").and_then(Value::as_str)
    }

    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.json.get("latitude").and_then(Value::as_f64)
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.json.get("longitude").and_then(Value::as_f64)
    }

    /// Whether the response carried the named block
    #[must_use]
    pub fn has_block(&self, name: BlockName) -> bool {
        self.block(name).is_some()
    }

    #[must_use]
    pub const fn response(&self) -> &ResponseMeta {
        &self.response
    }

    #[must_use]
    pub const fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    /// Replace the payload after a re-fetch of the same URL
    pub fn replace_payload(&mut self, body: Value, response: ResponseMeta) {
        *self = Self::new(body, response);
    }

    /// Splice in a block fetched separately
    pub fn insert_block(&mut self, name: BlockName, value: Value) {
        if name == BlockName::Alerts {
            self.alerts = Alert::list_from(Some(&value));
        }
        self.json.insert(name.as_str().to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Forecast {
        Forecast::new(
            json!({
                "latitude": 37.8267,
                "longitude": -122.4233,
                "timezone": "America/Los_Angeles",
                "offset": -8,
                "currently": {"time": 1_509_993_277, "temperature": 17.02},
                "hourly": {"summary": "Rain", "icon": "rain", "data": [{"time": 1}]},
                "flags": {"units": "si"},
                "alerts": [{"title": "Flood Watch"}]
            }),
            ResponseMeta {
                url: "https://example.test/forecast".to_string(),
                status: 200,
                headers: BTreeMap::from([(
                    "X-Forecast-API-Calls".to_string(),
                    "7".to_string(),
                )]),
            },
        )
    }

    #[test]
    fn test_block_accessors() {
        let f = fixture();
        assert_eq!(f.currently().number("temperature"), Some(17.02));
        assert_eq!(f.hourly().len(), 1);
        assert_eq!(f.flags().units(), Some("si"));
        assert_eq!(f.alerts().len(), 1);
        assert_eq!(f.offset(), Some(-8.0));
        assert_eq!(f.timezone(), Some("America/Los_Angeles"));
    }

    #[test]
    fn test_absent_blocks_are_empty() {
        let f = fixture();
        let daily = f.daily();
        assert!(daily.summary.is_none());
        assert!(daily.icon.is_none());
        assert!(daily.data.is_empty());
        assert!(f.minutely().is_empty());
        assert!(f.day_night().is_empty());
        assert!(!f.has_block(BlockName::Daily));
        assert!(f.has_block(BlockName::Hourly));
    }

    #[test]
    fn test_non_object_body() {
        let f = Forecast::new(json!("oops"), ResponseMeta::default());
        assert!(f.currently().is_empty());
        assert!(f.alerts().is_empty());
        assert!(f.flags().is_empty());
        assert!(f.offset().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let f = fixture();
        assert_eq!(f.response().header("x-forecast-api-calls"), Some("7"));
        assert_eq!(f.response().status, 200);
    }

    #[test]
    fn test_replace_payload_rebuilds_alerts() {
        let mut f = fixture();
        f.replace_payload(json!({"currently": {"temperature": 1.0}}), ResponseMeta::default());
        assert!(f.alerts().is_empty());
        assert_eq!(f.currently().number("temperature"), Some(1.0));
    }

    #[test]
    fn test_insert_block() {
        let mut f = fixture();
        f.insert_block(
            BlockName::Daily,
            json!({"summary": "Sunny", "data": [{"temperatureHigh": 25.0}]}),
        );
        assert_eq!(f.daily().summary.as_deref(), Some("Sunny"));
        f.insert_block(BlockName::Alerts, json!([]));
        assert!(f.alerts().is_empty());
    }

    #[test]
    fn test_block_names() {
        assert_eq!(BlockName::DayNight.as_str(), "day_night");
        assert_eq!(BlockName::ALL.len(), 7);
    }
}
