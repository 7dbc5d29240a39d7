//! Sensor entities and platform setup

use std::collections::BTreeMap;
use std::fmt;

use domain::{Forecast, RoundingPolicy, Timezone, UnitSystem};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::state::{ForecastOffset, SensorValue, StateOptions, StateReading, compute_state};
use super::update_coordinator::UpdateCoordinator;
use crate::error::ApplicationError;
use crate::sensors::{
    ConditionPicture, ForecastMode, SensorDescriptor, SensorRegistry, ValueKind,
    condition_picture,
};

/// Attribution attached to every entity
pub const ATTRIBUTION: &str = "Powered by Pirate Weather";

/// Attribute key carrying [`ATTRIBUTION`]
pub const ATTR_ATTRIBUTION: &str = "attribution";

/// Inputs of sensor platform setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorSetup {
    /// Identifier of the configured location, prefix of every unique id
    pub entry_id: String,
    /// Display name prefix
    pub client_name: String,
    pub monitored_conditions: Vec<String>,
    pub forecast_days: Vec<usize>,
    pub forecast_hours: Vec<usize>,
    pub units: UnitSystem,
    pub rounding: RoundingPolicy,
    pub timezone: Timezone,
}

/// One sensor bound to a descriptor and a forecast record
#[derive(Debug, Clone, PartialEq)]
pub struct SensorEntity {
    unique_id: String,
    name: String,
    descriptor: &'static SensorDescriptor,
    offset: ForecastOffset,
    options: StateOptions,
}

/// Point-in-time view of a sensor, for display and JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSnapshot {
    pub unique_id: String,
    pub name: String,
    pub state: Option<SensorValue>,
    pub unit_of_measurement: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub entity_picture: Option<&'static str>,
    pub available: bool,
    pub attributes: BTreeMap<String, Value>,
}

impl SensorEntity {
    #[must_use]
    pub fn new(
        entry_id: &str,
        client_name: &str,
        descriptor: &'static SensorDescriptor,
        offset: ForecastOffset,
        options: StateOptions,
    ) -> Self {
        let (id_suffix, name_suffix) = match offset {
            ForecastOffset::Current => (String::new(), String::new()),
            ForecastOffset::Day(day) => (format!("-daily-{day}"), format!(" {day}d")),
            ForecastOffset::Hour(hour) => (format!("-hourly-{hour}"), format!(" {hour}h")),
        };
        Self {
            unique_id: format!("{entry_id}-sensor-{}{id_suffix}", descriptor.key),
            name: format!("{client_name} {}{name_suffix}", descriptor.name),
            descriptor,
            offset,
            options,
        }
    }

    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn descriptor(&self) -> &'static SensorDescriptor {
        self.descriptor
    }

    #[must_use]
    pub const fn offset(&self) -> ForecastOffset {
        self.offset
    }

    /// Full state computation, including condition icon and alert attributes
    #[must_use]
    pub fn reading(&self, forecast: &Forecast) -> StateReading {
        compute_state(self.descriptor, self.offset, forecast, &self.options)
    }

    #[must_use]
    pub fn native_value(&self, forecast: &Forecast) -> Option<SensorValue> {
        self.reading(forecast).value
    }

    /// Unit for the configured unit system, falling back to SI
    #[must_use]
    pub const fn unit_of_measurement(&self) -> Option<&'static str> {
        self.descriptor.unit_for(self.options.units)
    }

    /// Summary sensors show the icon of the condition they read
    #[must_use]
    pub fn icon(&self, forecast: &Forecast) -> Option<&'static str> {
        self.picture_of(&self.reading(forecast))
            .map(|picture| picture.icon)
            .or(self.descriptor.icon)
    }

    #[must_use]
    pub fn entity_picture(&self, forecast: &Forecast) -> Option<&'static str> {
        self.picture_of(&self.reading(forecast))
            .map(|picture| picture.entity_picture)
    }

    /// Attribution, plus the flattened alerts for the alerts sensor
    #[must_use]
    pub fn extra_state_attributes(&self, forecast: &Forecast) -> BTreeMap<String, Value> {
        self.attributes_of(self.reading(forecast))
    }

    fn picture_of(&self, reading: &StateReading) -> Option<ConditionPicture> {
        if !self.descriptor.is_summary() {
            return None;
        }
        reading.condition_icon.as_deref().and_then(condition_picture)
    }

    fn attributes_of(&self, reading: StateReading) -> BTreeMap<String, Value> {
        let mut attributes = if self.descriptor.kind == ValueKind::Alerts {
            reading.attributes
        } else {
            BTreeMap::new()
        };
        attributes.insert(
            ATTR_ATTRIBUTION.to_string(),
            Value::String(ATTRIBUTION.to_string()),
        );
        attributes
    }

    /// Available while a forecast is published and the last refresh succeeded
    #[must_use]
    pub fn available(&self, coordinator: &UpdateCoordinator) -> bool {
        coordinator.data().is_some() && coordinator.last_update_success()
    }

    /// Everything the host renders, in one state computation
    #[must_use]
    pub fn snapshot(&self, forecast: &Forecast, available: bool) -> SensorSnapshot {
        let mut reading = self.reading(forecast);
        let picture = self.picture_of(&reading);
        let state = reading.value.take();

        SensorSnapshot {
            unique_id: self.unique_id.clone(),
            name: self.name.clone(),
            state,
            unit_of_measurement: self.unit_of_measurement(),
            icon: picture.map(|p| p.icon).or(self.descriptor.icon),
            entity_picture: picture.map(|p| p.entity_picture),
            available,
            attributes: self.attributes_of(reading),
        }
    }
}

impl fmt::Display for SensorEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.unique_id)
    }
}

/// Create the sensor entities for the monitored conditions
///
/// Each condition gets a current sensor when its modes are empty or include
/// `currently`, one sensor per configured day when they include `daily`, and
/// one per configured hour when they include `hourly`.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` for an unknown condition.
pub fn build_sensor_entities(
    registry: &SensorRegistry,
    setup: &SensorSetup,
) -> Result<Vec<SensorEntity>, ApplicationError> {
    let options = StateOptions {
        units: setup.units,
        rounding: setup.rounding,
        timezone: setup.timezone,
    };
    let mut entities = Vec::new();

    for condition in &setup.monitored_conditions {
        let descriptor = registry.get(condition).ok_or_else(|| {
            ApplicationError::Configuration(format!("Unknown monitored condition: {condition}"))
        })?;

        if descriptor.deprecated {
            warn!(
                condition = %condition,
                "Monitored condition is deprecated and will be removed in a future release"
            );
        }

        let mut add = |offset| {
            entities.push(SensorEntity::new(
                &setup.entry_id,
                &setup.client_name,
                descriptor,
                offset,
                options,
            ));
        };

        if descriptor.has_current_sensor() {
            add(ForecastOffset::Current);
        }
        if descriptor.supports(ForecastMode::Daily) {
            for &day in &setup.forecast_days {
                add(ForecastOffset::Day(day));
            }
        }
        if descriptor.supports(ForecastMode::Hourly) {
            for &hour in &setup.forecast_hours {
                add(ForecastOffset::Hour(hour));
            }
        }
    }

    debug!(count = entities.len(), "Sensor entities created");
    Ok(entities)
}
