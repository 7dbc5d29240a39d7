//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's forecast port over the Pirate Weather
//! client and hosts configuration loading, logging setup and the polling
//! task.

pub mod adapters;
pub mod config;
pub mod scheduler;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, Platform, PirateWeatherConfig, Settings};
pub use scheduler::{effective_interval, spawn_polling_task};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
