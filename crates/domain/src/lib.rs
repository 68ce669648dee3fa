//! Domain layer for Skycast
//!
//! Weather entities, value objects, theming primitives and the daily
//! forecast reducer. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{DEFAULT_FORECAST_DAYS, reduce_daily};
pub use value_objects::*;
