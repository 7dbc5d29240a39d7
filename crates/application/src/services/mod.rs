//! Application services - Use case implementations

mod alerts;
mod api_key;
mod conversions;
mod sensor_entity;
mod state;
mod update_coordinator;
mod weather_entity;

pub use alerts::flatten_alerts;
pub use api_key::{INVALID_API_KEY_MESSAGE, validate_api_key};
pub use conversions::{celsius_to_fahrenheit, convert_from_si, normalize, round_to};
pub use sensor_entity::{
    ATTR_ATTRIBUTION, ATTRIBUTION, SensorEntity, SensorSetup, SensorSnapshot,
    build_sensor_entities,
};
pub use state::{
    ForecastOffset, SensorValue, StateOptions, StateReading, compute_state, fire_risk_level,
    round_reading, to_camel_case,
};
pub use update_coordinator::UpdateCoordinator;
pub use weather_entity::{
    CurrentConditions, ForecastEntry, WeatherEntity, map_daily_entry, map_day_night_entry,
    map_hourly_entry, native_units,
};
