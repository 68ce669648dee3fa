//! Logging infrastructure
//!
//! Installs the `tracing` subscriber used by the binaries.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_tracing};
