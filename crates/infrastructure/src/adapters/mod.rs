//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod forecast_adapter;

pub use forecast_adapter::ForecastAdapter;
