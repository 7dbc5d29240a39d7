//! A named forecast series

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data_point::DataPoint;

/// A forecast series (`minutely`, `hourly`, `daily`, `day_night`)
///
/// An absent block is represented by [`DataBlock::default`]: no summary, no
/// icon and no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub data: Vec<DataPoint>,
}

impl DataBlock {
    /// Decode a block from its JSON object
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let data = value
            .get("data")
            .and_then(Value::as_array)
            .map(|points| points.iter().map(DataPoint::from_value).collect())
            .unwrap_or_default();

        Self {
            summary: text("summary"),
            icon: text("icon"),
            data,
        }
    }

    /// Point at `index`, `None` when out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.data.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_block() {
        let block = DataBlock::from_value(&json!({
            "summary": "Rain throughout the week.",
            "icon": "rain",
            "data": [{"time": 1}, {"time": 2}]
        }));
        assert_eq!(block.summary.as_deref(), Some("Rain throughout the week."));
        assert_eq!(block.icon.as_deref(), Some("rain"));
        assert_eq!(block.len(), 2);
        assert_eq!(block.get(1).and_then(DataPoint::unix_time), Some(2));
        assert!(block.get(2).is_none());
    }

    #[test]
    fn test_decode_without_data() {
        let block = DataBlock::from_value(&json!({"summary": "Clear"}));
        assert!(block.is_empty());
        assert!(block.icon.is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let block = DataBlock::default();
        assert!(block.summary.is_none());
        assert!(block.icon.is_none());
        assert!(block.is_empty());
    }
}
