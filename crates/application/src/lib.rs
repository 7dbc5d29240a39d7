//! Application layer - Use cases and orchestration
//!
//! Contains the sensor descriptor registry, state derivation, the sensor and
//! weather entities, the update coordinator and the port it refreshes through.

pub mod error;
pub mod ports;
pub mod sensors;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use sensors::*;
pub use services::*;
