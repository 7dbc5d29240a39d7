//! Flattening of active alerts into entity attributes

use std::collections::BTreeMap;

use domain::{ALERT_FIELDS, Alert, Timezone};
use serde_json::Value;

/// Flatten alerts into a single attribute map
///
/// A single alert yields the plain field names. With several alerts every
/// key is suffixed with the alert index (`title_0`, `title_1`, ...). Integer
/// fields are epoch seconds and are rendered in `timezone`; absent fields are
/// kept as `null`.
#[must_use]
pub fn flatten_alerts(alerts: &[Alert], timezone: &Timezone) -> BTreeMap<String, Value> {
    let suffixed = alerts.len() > 1;
    let mut attributes = BTreeMap::new();

    for (index, alert) in alerts.iter().enumerate() {
        for field in ALERT_FIELDS {
            let key = if suffixed {
                format!("{field}_{index}")
            } else {
                field.to_string()
            };
            attributes.insert(key, localize(alert.get(field), timezone));
        }
    }

    attributes
}

fn localize(value: Option<&Value>, timezone: &Timezone) -> Value {
    match value {
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n
            .as_i64()
            .and_then(|secs| timezone.format_local(secs))
            .map_or_else(|| Value::Number(n.clone()), Value::String),
        Some(other) => other.clone(),
        None => Value::Null,
    }
}
