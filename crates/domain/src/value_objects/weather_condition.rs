//! Host weather conditions and the icon → condition mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition vocabulary understood by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    ClearNight,
    Rainy,
    Snowy,
    SnowyRainy,
    Windy,
    Fog,
    Cloudy,
    #[serde(rename = "partlycloudy")]
    PartlyCloudy,
    Hail,
    Lightning,
    Exceptional,
}

impl WeatherCondition {
    /// Map an API icon token to a host condition
    ///
    /// Unrecognised tokens map to `None`.
    #[must_use]
    pub fn from_icon(icon: &str) -> Option<Self> {
        let condition = match icon {
            "clear-day" => Self::Sunny,
            "clear-night" => Self::ClearNight,
            "rain" => Self::Rainy,
            "snow" => Self::Snowy,
            "sleet" => Self::SnowyRainy,
            "wind" => Self::Windy,
            "fog" => Self::Fog,
            "cloudy" => Self::Cloudy,
            "partly-cloudy-day" | "partly-cloudy-night" => Self::PartlyCloudy,
            "hail" => Self::Hail,
            "thunderstorm" => Self::Lightning,
            "tornado" => Self::Exceptional,
            _ => return None,
        };
        Some(condition)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::ClearNight => "clear-night",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::SnowyRainy => "snowy-rainy",
            Self::Windy => "windy",
            Self::Fog => "fog",
            Self::Cloudy => "cloudy",
            Self::PartlyCloudy => "partlycloudy",
            Self::Hail => "hail",
            Self::Lightning => "lightning",
            Self::Exceptional => "exceptional",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_icons() {
        assert_eq!(WeatherCondition::from_icon("clear-day"), Some(WeatherCondition::Sunny));
        assert_eq!(
            WeatherCondition::from_icon("partly-cloudy-night"),
            Some(WeatherCondition::PartlyCloudy)
        );
        assert_eq!(WeatherCondition::from_icon("sleet"), Some(WeatherCondition::SnowyRainy));
        assert_eq!(
            WeatherCondition::from_icon("thunderstorm"),
            Some(WeatherCondition::Lightning)
        );
        assert_eq!(
            WeatherCondition::from_icon("tornado"),
            Some(WeatherCondition::Exceptional)
        );
    }

    #[test]
    fn unknown_icon_is_none() {
        assert_eq!(WeatherCondition::from_icon("mist"), None);
        assert_eq!(WeatherCondition::from_icon(""), None);
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).expect("serialize");
        assert_eq!(json, "\"partlycloudy\"");
        let json = serde_json::to_string(&WeatherCondition::SnowyRainy).expect("serialize");
        assert_eq!(json, "\"snowy-rainy\"");
    }
}
