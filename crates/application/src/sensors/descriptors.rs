//! Sensor descriptor table
//!
//! One entry per monitorable attribute. The table is a `const` slice; the
//! registry indexes it once and is handed to the entity layer explicitly.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use domain::{BlockName, UnitSystem};
use serde::Serialize;

/// Forecast block a sensor can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastMode {
    Currently,
    Minutely,
    Hourly,
    Daily,
}

/// Host device classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
    WindSpeed,
    Humidity,
    Pressure,
    Precipitation,
    Timestamp,
    Enum,
    Pm25,
}

/// Host state classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
}

/// Local conversion applied when the response is in SI but another system was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    None,
    Temperature,
    Speed,
    Distance,
    PrecipIntensity,
    PrecipAccumulation,
}

/// How a raw field becomes a presentable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Passed through unchanged
    Raw,
    /// Point summary text; records the point icon
    Summary,
    /// Summary of a whole block
    BlockSummary(BlockName),
    /// Alert count with flattened alert attributes
    Alerts,
    /// `flags.sourceTimes` entry
    ModelUpdateTime,
    /// Unix seconds decoded to UTC
    Timestamp,
    /// Fire index mapped to a risk label
    FireRisk,
    /// Fraction scaled to percent
    Percentage,
    /// Rounded with the scalar precision
    Scalar(Conversion),
    /// Rounded with the precipitation precision
    Precipitation(Conversion),
}

/// Native unit per unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitLabels {
    pub si: Option<&'static str>,
    pub us: Option<&'static str>,
    pub ca: Option<&'static str>,
    pub uk: Option<&'static str>,
    pub uk2: Option<&'static str>,
}

impl UnitLabels {
    pub const NONE: Self = Self {
        si: None,
        us: None,
        ca: None,
        uk: None,
        uk2: None,
    };

    const fn per_system(
        si: &'static str,
        us: &'static str,
        ca: &'static str,
        uk: &'static str,
        uk2: &'static str,
    ) -> Self {
        Self {
            si: Some(si),
            us: Some(us),
            ca: Some(ca),
            uk: Some(uk),
            uk2: Some(uk2),
        }
    }

    const fn same(unit: &'static str) -> Self {
        Self::per_system(unit, unit, unit, unit, unit)
    }

    /// Unit for a unit system
    #[must_use]
    pub const fn for_system(&self, units: UnitSystem) -> Option<&'static str> {
        match units {
            UnitSystem::Si => self.si,
            UnitSystem::Us => self.us,
            UnitSystem::Ca => self.ca,
            UnitSystem::Uk => self.uk,
            UnitSystem::Uk2 => self.uk2,
        }
    }
}

const TEMPERATURE: UnitLabels = UnitLabels::per_system("°C", "°F", "°C", "°C", "°C");
const SPEED: UnitLabels = UnitLabels::per_system("m/s", "mph", "km/h", "mph", "mph");
const DISTANCE: UnitLabels = UnitLabels::per_system("km", "mi", "km", "km", "mi");
const PRECIP_INTENSITY: UnitLabels = UnitLabels::per_system("mm/h", "in", "mm/h", "mm/h", "mm/h");
const ACCUMULATION: UnitLabels = UnitLabels::per_system("cm", "in", "cm", "cm", "cm");
const DEGREES: UnitLabels = UnitLabels::same("°");
const PERCENT: UnitLabels = UnitLabels::same("%");
const PRESSURE: UnitLabels = UnitLabels::same("mbar");
const DOBSON: UnitLabels = UnitLabels::same("DU");
const MICROGRAMS: UnitLabels = UnitLabels::same("µg/m³");
const UV_INDEX: UnitLabels = UnitLabels::same("UV index");

const NONE: &[ForecastMode] = &[];
const CURRENT: &[ForecastMode] = &[ForecastMode::Currently];
const DAILY: &[ForecastMode] = &[ForecastMode::Daily];
const HOURLY_DAILY: &[ForecastMode] = &[ForecastMode::Hourly, ForecastMode::Daily];
const CURRENT_HOURLY: &[ForecastMode] = &[ForecastMode::Currently, ForecastMode::Hourly];
const CURRENT_HOURLY_DAILY: &[ForecastMode] = &[
    ForecastMode::Currently,
    ForecastMode::Hourly,
    ForecastMode::Daily,
];
const ALL_MODES: &[ForecastMode] = &[
    ForecastMode::Currently,
    ForecastMode::Minutely,
    ForecastMode::Hourly,
    ForecastMode::Daily,
];

/// Fire risk labels, highest first
pub const FIRE_RISK_OPTIONS: &[&str] = &["Extreme", "Very High", "High", "Moderate", "Low", "N/A"];

const CLOCK: &str = "mdi:clock-time-three-outline";

/// Static metadata for one monitorable attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    /// Monitored-condition name (snake_case)
    pub key: &'static str,
    pub name: &'static str,
    pub icon: Option<&'static str>,
    pub units: UnitLabels,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
    pub display_precision: Option<u8>,
    /// Empty means "not tied to a timed block"
    pub modes: &'static [ForecastMode],
    pub options: &'static [&'static str],
    pub kind: ValueKind,
    /// `flags.sourceTimes` key for model update sensors
    pub source_key: Option<&'static str>,
    pub deprecated: bool,
}

impl SensorDescriptor {
    const fn new(key: &'static str, name: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            name,
            icon: None,
            units: UnitLabels::NONE,
            device_class: None,
            state_class: None,
            display_precision: None,
            modes: NONE,
            options: &[],
            kind,
            source_key: None,
            deprecated: false,
        }
    }

    const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    const fn units(mut self, units: UnitLabels) -> Self {
        self.units = units;
        self
    }

    const fn device(mut self, class: DeviceClass) -> Self {
        self.device_class = Some(class);
        self
    }

    const fn measurement(mut self) -> Self {
        self.state_class = Some(StateClass::Measurement);
        self
    }

    const fn precision(mut self, digits: u8) -> Self {
        self.display_precision = Some(digits);
        self
    }

    const fn modes(mut self, modes: &'static [ForecastMode]) -> Self {
        self.modes = modes;
        self
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    const fn source(mut self, key: &'static str) -> Self {
        self.source_key = Some(key);
        self
    }

    const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Whether the attribute can be read from the given block
    #[must_use]
    pub fn supports(&self, mode: ForecastMode) -> bool {
        self.modes.contains(&mode)
    }

    /// Whether a sensor without a day/hour offset should be created
    #[must_use]
    pub fn has_current_sensor(&self) -> bool {
        self.modes.is_empty() || self.supports(ForecastMode::Currently)
    }

    /// Native unit for a unit system, falling back to the SI unit
    #[must_use]
    pub const fn unit_for(&self, units: UnitSystem) -> Option<&'static str> {
        match self.units.for_system(units) {
            Some(unit) => Some(unit),
            None => self.units.si,
        }
    }

    /// Summary sensors show the condition icon of the data they read
    #[must_use]
    pub const fn is_summary(&self) -> bool {
        matches!(self.kind, ValueKind::Summary | ValueKind::BlockSummary(_))
    }
}

impl fmt::Display for SensorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.name)
    }
}

use ValueKind::{Precipitation, Scalar};

/// Every monitorable attribute
pub const SENSOR_DESCRIPTORS: &[SensorDescriptor] = &[
    SensorDescriptor::new("summary", "Summary", ValueKind::Summary).modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new(
        "minutely_summary",
        "Minutely Summary",
        ValueKind::BlockSummary(BlockName::Minutely),
    ),
    SensorDescriptor::new(
        "hourly_summary",
        "Hourly Summary",
        ValueKind::BlockSummary(BlockName::Hourly),
    ),
    SensorDescriptor::new(
        "daily_summary",
        "Daily Summary",
        ValueKind::BlockSummary(BlockName::Daily),
    ),
    SensorDescriptor::new("icon", "Icon", ValueKind::Raw).modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new(
        "nearest_storm_distance",
        "Nearest Storm Distance",
        Scalar(Conversion::Distance),
    )
    .units(DISTANCE)
    .precision(2)
    .icon("mdi:weather-lightning")
    .modes(CURRENT),
    SensorDescriptor::new("nearest_storm_bearing", "Nearest Storm Bearing", ValueKind::Raw)
        .units(DEGREES)
        .precision(0)
        .icon("mdi:weather-lightning")
        .modes(CURRENT),
    SensorDescriptor::new("precip_type", "Precip", ValueKind::Raw)
        .icon("mdi:weather-pouring")
        .modes(ALL_MODES),
    SensorDescriptor::new(
        "precip_intensity",
        "Precip Intensity",
        Precipitation(Conversion::PrecipIntensity),
    )
    .measurement()
    .units(PRECIP_INTENSITY)
    .precision(4)
    .icon("mdi:weather-rainy")
    .modes(ALL_MODES),
    SensorDescriptor::new(
        "precip_probability",
        "Precip Probability",
        ValueKind::Percentage,
    )
    .measurement()
    .units(PERCENT)
    .precision(0)
    .icon("mdi:water-percent")
    .modes(ALL_MODES),
    SensorDescriptor::new(
        "precip_accumulation",
        "Precip Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-snowy")
    .modes(HOURLY_DAILY),
    SensorDescriptor::new(
        "liquid_accumulation",
        "Liquid Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-rainy")
    .modes(HOURLY_DAILY),
    SensorDescriptor::new(
        "snow_accumulation",
        "Snow Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-snowy")
    .modes(HOURLY_DAILY),
    SensorDescriptor::new(
        "ice_accumulation",
        "Ice Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-snowy-rainy")
    .modes(HOURLY_DAILY),
    SensorDescriptor::new(
        "current_day_liquid",
        "Current Day Liquid Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-rainy")
    .modes(CURRENT),
    SensorDescriptor::new(
        "current_day_snow",
        "Current Day Snow Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-snowy")
    .modes(CURRENT),
    SensorDescriptor::new(
        "current_day_ice",
        "Current Day Ice Accumulation",
        Precipitation(Conversion::PrecipAccumulation),
    )
    .device(DeviceClass::Precipitation)
    .measurement()
    .units(ACCUMULATION)
    .precision(4)
    .icon("mdi:weather-snowy-rainy")
    .modes(CURRENT),
    SensorDescriptor::new("temperature", "Temperature", Scalar(Conversion::Temperature))
        .device(DeviceClass::Temperature)
        .measurement()
        .units(TEMPERATURE)
        .precision(2)
        .modes(CURRENT_HOURLY),
    SensorDescriptor::new(
        "apparent_temperature",
        "Apparent Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(CURRENT_HOURLY),
    SensorDescriptor::new("dew_point", "Dew Point", Scalar(Conversion::Temperature))
        .device(DeviceClass::Temperature)
        .measurement()
        .units(TEMPERATURE)
        .precision(2)
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("wind_speed", "Wind Speed", Scalar(Conversion::Speed))
        .device(DeviceClass::WindSpeed)
        .measurement()
        .units(SPEED)
        .precision(2)
        .icon("mdi:weather-windy")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("wind_bearing", "Wind Bearing", ValueKind::Raw)
        .measurement()
        .units(DEGREES)
        .precision(0)
        .icon("mdi:compass")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("wind_gust", "Wind Gust", Scalar(Conversion::Speed))
        .device(DeviceClass::WindSpeed)
        .measurement()
        .units(SPEED)
        .precision(2)
        .icon("mdi:weather-windy-variant")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("cloud_cover", "Cloud Coverage", ValueKind::Percentage)
        .measurement()
        .units(PERCENT)
        .precision(0)
        .icon("mdi:weather-partly-cloudy")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("humidity", "Humidity", ValueKind::Percentage)
        .device(DeviceClass::Humidity)
        .measurement()
        .units(PERCENT)
        .precision(0)
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("pressure", "Pressure", Scalar(Conversion::None))
        .device(DeviceClass::Pressure)
        .measurement()
        .units(PRESSURE)
        .precision(2)
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("visibility", "Visibility", Scalar(Conversion::Distance))
        .measurement()
        .units(DISTANCE)
        .precision(2)
        .icon("mdi:eye")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("ozone", "Ozone", Scalar(Conversion::None))
        .measurement()
        .units(DOBSON)
        .precision(2)
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("fire_index", "Fire Index", Scalar(Conversion::None))
        .measurement()
        .precision(2)
        .icon("mdi:fire")
        .modes(CURRENT_HOURLY),
    SensorDescriptor::new("fire_risk_level", "Fire Risk Level", ValueKind::FireRisk)
        .device(DeviceClass::Enum)
        .icon("mdi:fire")
        .modes(CURRENT_HOURLY_DAILY)
        .options(FIRE_RISK_OPTIONS),
    SensorDescriptor::new("fire_index_max", "Fire Index Max", Scalar(Conversion::None))
        .measurement()
        .precision(2)
        .icon("mdi:fire")
        .modes(DAILY),
    SensorDescriptor::new("smoke", "Smoke", Scalar(Conversion::None))
        .device(DeviceClass::Pm25)
        .measurement()
        .units(MICROGRAMS)
        .precision(2)
        .icon("mdi:smoke")
        .modes(CURRENT_HOURLY),
    SensorDescriptor::new("smoke_max", "Smoke Max", Scalar(Conversion::None))
        .device(DeviceClass::Pm25)
        .measurement()
        .units(MICROGRAMS)
        .precision(2)
        .icon("mdi:smoke")
        .modes(DAILY),
    SensorDescriptor::new(
        "apparent_temperature_max",
        "Daily High Apparent Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY)
    .deprecated(),
    SensorDescriptor::new(
        "apparent_temperature_high",
        "Daytime High Apparent Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY),
    SensorDescriptor::new(
        "apparent_temperature_high_time",
        "Daytime High Apparent Temperature Time",
        ValueKind::Timestamp,
    )
    .icon(CLOCK)
    .device(DeviceClass::Timestamp)
    .modes(DAILY),
    SensorDescriptor::new(
        "apparent_temperature_min",
        "Daily Low Apparent Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY)
    .deprecated(),
    SensorDescriptor::new(
        "apparent_temperature_low",
        "Overnight Low Apparent Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY),
    SensorDescriptor::new(
        "apparent_temperature_low_time",
        "Overnight Low Apparent Temperature Time",
        ValueKind::Timestamp,
    )
    .icon(CLOCK)
    .device(DeviceClass::Timestamp)
    .modes(DAILY),
    SensorDescriptor::new(
        "temperature_max",
        "Daily High Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY)
    .deprecated(),
    SensorDescriptor::new(
        "temperature_high",
        "Daytime High Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY),
    SensorDescriptor::new(
        "temperature_high_time",
        "Daytime High Temperature Time",
        ValueKind::Timestamp,
    )
    .icon(CLOCK)
    .device(DeviceClass::Timestamp)
    .modes(DAILY),
    SensorDescriptor::new(
        "temperature_min",
        "Daily Low Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY)
    .deprecated(),
    SensorDescriptor::new(
        "temperature_min_time",
        "Daily Low Temperature Time",
        ValueKind::Timestamp,
    )
    .icon(CLOCK)
    .device(DeviceClass::Timestamp)
    .modes(DAILY),
    SensorDescriptor::new(
        "temperature_low",
        "Overnight Low Temperature",
        Scalar(Conversion::Temperature),
    )
    .device(DeviceClass::Temperature)
    .measurement()
    .units(TEMPERATURE)
    .precision(2)
    .modes(DAILY),
    SensorDescriptor::new(
        "precip_intensity_max",
        "Daily Max Precip Intensity",
        Precipitation(Conversion::PrecipIntensity),
    )
    .measurement()
    .units(PRECIP_INTENSITY)
    .precision(2)
    .icon("mdi:thermometer")
    .modes(DAILY),
    SensorDescriptor::new("uv_index", "UV Index", Scalar(Conversion::None))
        .measurement()
        .units(UV_INDEX)
        .precision(2)
        .icon("mdi:weather-sunny")
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new("moon_phase", "Moon Phase", ValueKind::Raw)
        .precision(2)
        .icon("mdi:weather-night")
        .modes(DAILY),
    SensorDescriptor::new("sunrise_time", "Sunrise", ValueKind::Timestamp)
        .icon("mdi:white-balance-sunny")
        .device(DeviceClass::Timestamp)
        .modes(DAILY),
    SensorDescriptor::new("sunset_time", "Sunset", ValueKind::Timestamp)
        .icon("mdi:weather-night")
        .device(DeviceClass::Timestamp)
        .modes(DAILY),
    SensorDescriptor::new("alerts", "Alerts", ValueKind::Alerts).icon("mdi:alert-circle-outline"),
    SensorDescriptor::new("time", "Time", ValueKind::Timestamp)
        .icon(CLOCK)
        .device(DeviceClass::Timestamp)
        .modes(CURRENT_HOURLY_DAILY),
    SensorDescriptor::new(
        "hrrr_subh_update_time",
        "HRRR SubHourly Update Time",
        ValueKind::ModelUpdateTime,
    )
    .source("hrrr_subh")
    .icon(CLOCK)
    .device(DeviceClass::Timestamp),
    SensorDescriptor::new(
        "hrrr_0_18_update_time",
        "HRRR 0-18 Update Time",
        ValueKind::ModelUpdateTime,
    )
    .source("hrrr_0-18")
    .icon(CLOCK)
    .device(DeviceClass::Timestamp),
    SensorDescriptor::new("nbm_update_time", "NBM Update Time", ValueKind::ModelUpdateTime)
        .source("nbm")
        .icon(CLOCK)
        .device(DeviceClass::Timestamp),
    SensorDescriptor::new(
        "nbm_fire_update_time",
        "NBM Fire Update Time",
        ValueKind::ModelUpdateTime,
    )
    .source("nbm_fire")
    .icon(CLOCK)
    .device(DeviceClass::Timestamp),
    SensorDescriptor::new(
        "hrrr_18_48_update_time",
        "HRRR 18-48 Update Time",
        ValueKind::ModelUpdateTime,
    )
    .source("hrrr_18-48")
    .icon(CLOCK)
    .device(DeviceClass::Timestamp),
    SensorDescriptor::new("gfs_update_time", "GFS Update Time", ValueKind::ModelUpdateTime)
        .source("gfs")
        .icon(CLOCK)
        .device(DeviceClass::Timestamp),
    SensorDescriptor::new("gefs_update_time", "GEFS Update Time", ValueKind::ModelUpdateTime)
        .source("gefs")
        .icon(CLOCK)
        .device(DeviceClass::Timestamp),
];

static STANDARD_REGISTRY: LazyLock<SensorRegistry> =
    LazyLock::new(|| SensorRegistry::new(SENSOR_DESCRIPTORS));

/// Read-only index over a descriptor table
#[derive(Debug)]
pub struct SensorRegistry {
    descriptors: &'static [SensorDescriptor],
    by_key: HashMap<&'static str, usize>,
}

impl SensorRegistry {
    #[must_use]
    pub fn new(descriptors: &'static [SensorDescriptor]) -> Self {
        let by_key = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key, i))
            .collect();
        Self {
            descriptors,
            by_key,
        }
    }

    /// The built-in table, indexed once per process
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_REGISTRY
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static SensorDescriptor> {
        let descriptors = self.descriptors;
        self.by_key.get(key).map(|&i| &descriptors[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Descriptors in table order
    pub fn iter(&self) -> std::slice::Iter<'static, SensorDescriptor> {
        self.descriptors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
