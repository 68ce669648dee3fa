//! Application layer - Use cases and orchestration
//!
//! Contains the weather search use case, the display state it drives, and
//! the port definitions implemented by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
