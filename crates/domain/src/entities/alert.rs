//! Active weather alerts

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Alert fields exposed as entity attributes, in display order
pub const ALERT_FIELDS: [&str; 7] = [
    "time",
    "description",
    "expires",
    "severity",
    "uri",
    "regions",
    "title",
];

/// One active weather alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alert {
    fields: Map<String, Value>,
}

impl Alert {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                fields: map.clone(),
            },
            _ => Self::default(),
        }
    }

    /// Build the alert list from the `alerts` array; anything else is empty
    #[must_use]
    pub fn list_from(value: Option<&Value>) -> Vec<Self> {
        value
            .and_then(Value::as_array)
            .map(|alerts| alerts.iter().map(Self::from_value).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.fields.get("severity").and_then(Value::as_str)
    }

    #[must_use]
    pub fn time(&self) -> Option<i64> {
        self.fields.get("time").and_then(Value::as_i64)
    }

    #[must_use]
    pub fn expires(&self) -> Option<i64> {
        self.fields.get("expires").and_then(Value::as_i64)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
