//! Static sensor metadata

mod conditions;
mod descriptors;

pub use conditions::{ConditionPicture, condition_picture};
pub use descriptors::{
    Conversion, DeviceClass, FIRE_RISK_OPTIONS, ForecastMode, SENSOR_DESCRIPTORS,
    SensorDescriptor, SensorRegistry, StateClass, UnitLabels, ValueKind,
};
