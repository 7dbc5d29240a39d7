//! Property-based tests for the forecast facade and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    BlockName, DataPoint, Forecast, GeoLocation, MISSING_VALUE, ResponseMeta, UnitSystem,
    parse_source_time,
};
use proptest::prelude::*;
use serde_json::{Value, json};

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn path_segment_contains_both_coordinates(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new_unchecked(lat, lon);
            let segment = loc.path_segment();
            let (a, b) = segment.split_once(',').unwrap();
            prop_assert_eq!(a.parse::<f64>().unwrap(), lat);
            prop_assert_eq!(b.parse::<f64>().unwrap(), lon);
        }
    }
}

// ============================================================================
// UnitSystem Property Tests
// ============================================================================

mod unit_system_tests {
    use super::*;

    proptest! {
        #[test]
        fn parse_ignores_case(idx in 0usize..5, upper in any::<bool>()) {
            let units = UnitSystem::ALL[idx];
            let raw = if upper {
                units.as_str().to_uppercase()
            } else {
                units.as_str().to_string()
            };
            prop_assert_eq!(raw.parse::<UnitSystem>().unwrap(), units);
        }

        #[test]
        fn unknown_strings_rejected(s in "[a-z]{3,8}") {
            prop_assert!(s.parse::<UnitSystem>().is_err());
        }
    }
}

// ============================================================================
// Forecast Facade Property Tests
// ============================================================================

mod forecast_tests {
    use super::*;

    proptest! {
        #[test]
        fn missing_daily_block_is_empty(
            temperature in -60.0f64..60.0f64,
            include_hourly in any::<bool>()
        ) {
            let mut body = json!({"currently": {"temperature": temperature}});
            if include_hourly {
                body["hourly"] = json!({"data": [{"temperature": temperature}]});
            }
            let forecast = Forecast::new(body, ResponseMeta::default());
            let daily = forecast.daily();
            prop_assert!(daily.summary.is_none());
            prop_assert!(daily.icon.is_none());
            prop_assert!(daily.data.is_empty());
            prop_assert!(!forecast.has_block(BlockName::Daily));
        }

        #[test]
        fn sentinel_never_surfaces_as_reading(key in "[a-zA-Z]{1,16}") {
            let point = DataPoint::from_value(&json!({ key.clone(): MISSING_VALUE }));
            prop_assert_eq!(point.reading(&key), None);
            prop_assert_eq!(point.timestamp(&key), None);
        }

        #[test]
        fn readings_other_than_sentinel_pass_through(value in -998.0f64..1.0e6f64) {
            let point = DataPoint::from_value(&json!({ "ozone": value }));
            prop_assert_eq!(point.reading("ozone"), Some(value));
        }

        #[test]
        fn arbitrary_scalar_bodies_never_panic(n in any::<i64>(), s in ".*") {
            for body in [json!(n), json!(s.clone()), Value::Null, json!([n])] {
                let forecast = Forecast::new(body, ResponseMeta::default());
                prop_assert!(forecast.currently().is_empty());
                prop_assert!(forecast.alerts().is_empty());
            }
        }

        #[test]
        fn source_times_parse_every_hour(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24
        ) {
            let raw = format!("{year:04}-{month:02}-{day:02} {hour:02}Z");
            let parsed = parse_source_time(&raw).unwrap();
            prop_assert_eq!(parsed.format("%Y-%m-%d %HZ").to_string(), raw);
        }
    }
}
