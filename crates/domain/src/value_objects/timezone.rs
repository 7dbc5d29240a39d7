//! Timezone value object

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// An IANA timezone, validated against the chrono-tz database
///
/// Alert attributes render epoch seconds in this zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` for unknown names
    pub fn new(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// UTC
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0.name()
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Check if this is a UTC timezone
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.as_str(), "UTC" | "Etc/UTC" | "Etc/GMT")
    }

    /// Render epoch seconds as an RFC 3339 timestamp in this zone
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    #[must_use]
    pub fn format_local(&self, epoch_seconds: i64) -> Option<String> {
        DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
            .map(|utc| self.0.from_utc_datetime(&utc.naive_utc()).to_rfc3339())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timezone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Timezone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_creation() {
        let tz = Timezone::new("Europe/Berlin").expect("valid timezone");
        assert_eq!(tz.as_str(), "Europe/Berlin");
    }

    #[test]
    fn test_timezone_rejects_unknown() {
        assert_eq!(
            Timezone::new("Mars/Olympus"),
            Err(DomainError::InvalidTimezone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_timezone_default() {
        assert_eq!(Timezone::default().as_str(), "UTC");
        assert!(Timezone::default().is_utc());
    }

    #[test]
    fn test_format_local_utc() {
        let tz = Timezone::utc();
        assert_eq!(
            tz.format_local(1_509_993_277).as_deref(),
            Some("2017-11-06T18:34:37+00:00")
        );
    }

    #[test]
    fn test_format_local_offset() {
        let tz = Timezone::new("America/New_York").expect("valid timezone");
        assert_eq!(
            tz.format_local(1_509_993_277).as_deref(),
            Some("2017-11-06T13:34:37-05:00")
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let tz = Timezone::new("Europe/London").expect("valid timezone");
        let json = serde_json::to_string(&tz).expect("serialize");
        assert_eq!(json, "\"Europe/London\"");
        let back: Timezone = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tz);
        assert!(serde_json::from_str::<Timezone>("\"Nowhere/Land\"").is_err());
    }
}
