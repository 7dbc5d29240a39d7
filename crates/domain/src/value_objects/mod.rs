//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod language;
mod rounding_policy;
mod timezone;
mod unit_system;
mod weather_condition;

pub use geo_location::GeoLocation;
pub use language::{LANGUAGE_CODES, Language};
pub use rounding_policy::RoundingPolicy;
pub use timezone::Timezone;
pub use unit_system::UnitSystem;
pub use weather_condition::WeatherCondition;
