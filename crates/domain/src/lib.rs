//! Domain layer for the Pirate Weather integration
//!
//! Contains the forecast facade (typed views over a single API response) and
//! the value objects shared by the fetch layer and the entity layer.
//! Nothing in this crate performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
