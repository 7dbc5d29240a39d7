//! Forecast facade entities

mod alert;
mod data_block;
mod data_point;
mod flags;
mod forecast;

pub use alert::{ALERT_FIELDS, Alert};
pub use data_block::DataBlock;
pub use data_point::{DataPoint, MISSING_VALUE, is_missing};
pub use flags::{FlagsBlock, parse_source_time};
pub use forecast::{BlockName, Forecast, ResponseMeta};
