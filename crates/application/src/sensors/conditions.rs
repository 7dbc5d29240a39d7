//! Entity pictures and icons for API icon tokens

/// Picture and icon shown by summary sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionPicture {
    pub entity_picture: &'static str,
    pub icon: &'static str,
}

const fn picture(entity_picture: &'static str, icon: &'static str) -> ConditionPicture {
    ConditionPicture {
        entity_picture,
        icon,
    }
}

/// Look up the picture for an API icon token
#[must_use]
pub fn condition_picture(icon: &str) -> Option<ConditionPicture> {
    let found = match icon {
        "clear-day" => picture("/static/images/darksky/weather-sunny.svg", "mdi:weather-sunny"),
        "clear-night" => picture("/static/images/darksky/weather-night.svg", "mdi:weather-night"),
        "rain" => picture(
            "/static/images/darksky/weather-pouring.svg",
            "mdi:weather-pouring",
        ),
        "snow" => picture("/static/images/darksky/weather-snowy.svg", "mdi:weather-snowy"),
        "sleet" => picture(
            "/static/images/darksky/weather-hail.svg",
            "mdi:weather-snowy-rainy",
        ),
        "wind" => picture("/static/images/darksky/weather-windy.svg", "mdi:weather-windy"),
        "fog" => picture("/static/images/darksky/weather-fog.svg", "mdi:weather-fog"),
        "cloudy" => picture(
            "/static/images/darksky/weather-cloudy.svg",
            "mdi:weather-cloudy",
        ),
        "partly-cloudy-day" => picture(
            "/static/images/darksky/weather-partlycloudy.svg",
            "mdi:weather-partly-cloudy",
        ),
        "partly-cloudy-night" => picture(
            "/static/images/darksky/weather-cloudy.svg",
            "mdi:weather-night-partly-cloudy",
        ),
        _ => return None,
    };
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons() {
        let rain = condition_picture("rain").unwrap();
        assert_eq!(rain.icon, "mdi:weather-pouring");
        assert!(rain.entity_picture.ends_with("weather-pouring.svg"));

        let night = condition_picture("partly-cloudy-night").unwrap();
        assert_eq!(night.icon, "mdi:weather-night-partly-cloudy");
    }

    #[test]
    fn test_unknown_icons() {
        assert!(condition_picture("hail").is_none());
        assert!(condition_picture("").is_none());
    }
}
