//! Unit conversion and rounding helpers
//!
//! Values are normally requested upstream in the target unit system. These
//! conversions only apply when a response arrived in SI units while another
//! system is configured.

use domain::UnitSystem;

use crate::sensors::Conversion;

const MPS_TO_MPH: f64 = 2.236_94;
const MPS_TO_KMH: f64 = 3.6;
const KM_TO_MI: f64 = 0.621_371;
const MM_PER_INCH: f64 = 25.4;
const CM_PER_INCH: f64 = 2.54;

/// Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert an SI value into `target` units
#[must_use]
pub fn convert_from_si(value: f64, conversion: Conversion, target: UnitSystem) -> f64 {
    match (conversion, target) {
        (Conversion::Temperature, UnitSystem::Us) => celsius_to_fahrenheit(value),
        (Conversion::Speed, UnitSystem::Us | UnitSystem::Uk | UnitSystem::Uk2) => {
            value * MPS_TO_MPH
        },
        (Conversion::Speed, UnitSystem::Ca) => value * MPS_TO_KMH,
        (Conversion::Distance, UnitSystem::Us | UnitSystem::Uk2) => value * KM_TO_MI,
        (Conversion::PrecipIntensity, UnitSystem::Us) => value / MM_PER_INCH,
        (Conversion::PrecipAccumulation, UnitSystem::Us) => value / CM_PER_INCH,
        _ => value,
    }
}

/// Convert only when the response units differ from the target
///
/// `source` is the unit system reported in `flags.units`; when it is unknown
/// the value is assumed to already be in `target` units.
#[must_use]
pub fn normalize(
    value: f64,
    conversion: Conversion,
    source: Option<UnitSystem>,
    target: UnitSystem,
) -> f64 {
    match source {
        Some(UnitSystem::Si) if target != UnitSystem::Si => {
            convert_from_si(value, conversion, target)
        },
        _ => value,
    }
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_temperature() {
        assert!(close(
            convert_from_si(0.0, Conversion::Temperature, UnitSystem::Us),
            32.0
        ));
        assert!(close(
            convert_from_si(100.0, Conversion::Temperature, UnitSystem::Us),
            212.0
        ));
        assert!(close(
            convert_from_si(17.0, Conversion::Temperature, UnitSystem::Ca),
            17.0
        ));
    }

    #[test]
    fn test_wind_speed() {
        assert!(close(
            convert_from_si(10.0, Conversion::Speed, UnitSystem::Us),
            22.3694
        ));
        assert!(close(
            convert_from_si(10.0, Conversion::Speed, UnitSystem::Ca),
            36.0
        ));
        assert!(close(
            convert_from_si(10.0, Conversion::Speed, UnitSystem::Uk2),
            22.3694
        ));
    }

    #[test]
    fn test_distance() {
        assert!(close(
            convert_from_si(10.0, Conversion::Distance, UnitSystem::Us),
            6.21371
        ));
        assert!(close(
            convert_from_si(10.0, Conversion::Distance, UnitSystem::Uk),
            10.0
        ));
    }

    #[test]
    fn test_precipitation() {
        assert!(close(
            convert_from_si(25.4, Conversion::PrecipIntensity, UnitSystem::Us),
            1.0
        ));
        assert!(close(
            convert_from_si(5.08, Conversion::PrecipAccumulation, UnitSystem::Us),
            2.0
        ));
    }

    #[test]
    fn test_normalize_only_from_si() {
        assert!(close(
            normalize(0.0, Conversion::Temperature, Some(UnitSystem::Si), UnitSystem::Us),
            32.0
        ));
        assert!(close(
            normalize(50.0, Conversion::Temperature, Some(UnitSystem::Us), UnitSystem::Us),
            50.0
        ));
        assert!(close(
            normalize(50.0, Conversion::Temperature, None, UnitSystem::Us),
            50.0
        ));
        assert!(close(
            normalize(10.0, Conversion::Speed, Some(UnitSystem::Si), UnitSystem::Si),
            10.0
        ));
    }

    #[test]
    fn test_round_to() {
        assert!(close(round_to(22.3694, 2), 22.37));
        assert!(close(round_to(1.23456, 4), 1.2346));
        assert!(close(round_to(17.5, 0), 18.0));
        assert!(close(round_to(-2.5, 0), -3.0));
    }
}
