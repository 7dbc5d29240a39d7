//! Output rounding policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Display precision selected when a sensor is set up
///
/// | policy  | scalars | precipitation |
/// |---------|---------|---------------|
/// | rounded | 0       | 2             |
/// | precise | 2       | 4             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Whole numbers for most scalars
    Rounded,
    /// Two decimals for most scalars
    #[default]
    Precise,
}

impl RoundingPolicy {
    /// Map the boolean "round output" toggle to a policy
    #[must_use]
    pub const fn from_flag(round_output: bool) -> Self {
        if round_output {
            Self::Rounded
        } else {
            Self::Precise
        }
    }

    /// Decimal places for ordinary scalar readings
    #[must_use]
    pub const fn scalar_decimals(&self) -> u32 {
        match self {
            Self::Rounded => 0,
            Self::Precise => 2,
        }
    }

    /// Decimal places for precipitation intensity and accumulation
    #[must_use]
    pub const fn precipitation_decimals(&self) -> u32 {
        match self {
            Self::Rounded => 2,
            Self::Precise => 4,
        }
    }

    #[must_use]
    pub const fn is_rounded(&self) -> bool {
        matches!(self, Self::Rounded)
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rounded => write!(f, "rounded"),
            Self::Precise => write!(f, "precise"),
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = DomainError;

    /// Accepts the policy names as well as the legacy "Yes"/"No" toggle values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rounded" | "yes" | "true" => Ok(Self::Rounded),
            "precise" | "no" | "false" => Ok(Self::Precise),
            _ => Err(DomainError::InvalidRounding(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_per_policy() {
        assert_eq!(RoundingPolicy::Rounded.scalar_decimals(), 0);
        assert_eq!(RoundingPolicy::Rounded.precipitation_decimals(), 2);
        assert_eq!(RoundingPolicy::Precise.scalar_decimals(), 2);
        assert_eq!(RoundingPolicy::Precise.precipitation_decimals(), 4);
    }

    #[test]
    fn from_flag() {
        assert_eq!(RoundingPolicy::from_flag(true), RoundingPolicy::Rounded);
        assert_eq!(RoundingPolicy::from_flag(false), RoundingPolicy::Precise);
    }

    #[test]
    fn parse_legacy_toggle() {
        assert_eq!("Yes".parse::<RoundingPolicy>(), Ok(RoundingPolicy::Rounded));
        assert_eq!("No".parse::<RoundingPolicy>(), Ok(RoundingPolicy::Precise));
        assert!("maybe".parse::<RoundingPolicy>().is_err());
    }
}
