//! Pirate Weather integration
//!
//! Client for the Pirate Weather forecast API (<https://pirateweather.net>).
//! One GET per refresh; the decoded body is wrapped in a [`domain::Forecast`].

pub mod client;
mod error;

pub use client::{
    ClientConfig, DEFAULT_ENDPOINT, ForecastClient, ForecastRequest, PirateWeatherClient,
    redact_api_key,
};
pub use error::ForecastError;
