//! Unit system value object
//!
//! The forecast API accepts five unit systems. The same identifier is used to
//! pick the display unit of every sensor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit system requested from the API and expected by consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Metric, wind in m/s
    Si,
    /// Imperial
    #[default]
    Us,
    /// Metric, wind in km/h
    Ca,
    /// Metric, wind in mph
    Uk,
    /// Metric, wind in mph, distances in miles
    Uk2,
}

impl UnitSystem {
    /// All unit systems in declaration order
    pub const ALL: [Self; 5] = [Self::Si, Self::Us, Self::Ca, Self::Uk, Self::Uk2];

    /// Query-string identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Si => "si",
            Self::Us => "us",
            Self::Ca => "ca",
            Self::Uk => "uk",
            Self::Uk2 => "uk2",
        }
    }

    /// Whether temperatures are reported in Fahrenheit
    #[must_use]
    pub const fn is_fahrenheit(&self) -> bool {
        matches!(self, Self::Us)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "si" => Ok(Self::Si),
            "us" => Ok(Self::Us),
            "ca" => Ok(Self::Ca),
            "uk" => Ok(Self::Uk),
            "uk2" => Ok(Self::Uk2),
            _ => Err(DomainError::InvalidUnitSystem(s.to_string())),
        }
    }
}
