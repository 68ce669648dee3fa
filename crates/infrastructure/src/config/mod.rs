//! Application configuration
//!
//! Split into focused sub-modules:
//! - `weather`: OpenWeatherMap endpoint, API key and timeout
//! - `display`: initial theme, color mode and forecast length
//!
//! Logging settings reuse [`crate::telemetry::TelemetryConfig`].

mod display;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use display::{DisplayConfig, MAX_FORECAST_DAYS};
pub use weather::WeatherAppConfig;

use crate::telemetry::TelemetryConfig;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skycast";

/// Prefix of environment overrides (e.g. `SKYCAST_WEATHER__API_KEY`)
pub const ENV_PREFIX: &str = "SKYCAST";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or merging a configuration source failed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// No OpenWeatherMap API key configured
    #[error("Missing OpenWeatherMap API key (set weather.api_key or SKYCAST_WEATHER__API_KEY)")]
    MissingApiKey,

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `skycast.toml` (if present) and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, or the default one
    ///
    /// An explicit path must exist; the default file is optional.
    /// Environment variables override both.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = ::config::Config::builder()
            // Start with defaults
            .set_default("display.theme", "classic")?
            .set_default("display.mode", "light")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., SKYCAST_DISPLAY__THEME)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weather.has_api_key() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(1..=MAX_FORECAST_DAYS).contains(&self.display.forecast_days) {
            return Err(ConfigError::Invalid(format!(
                "display.forecast_days must be between 1 and {MAX_FORECAST_DAYS}, got {}",
                self.display.forecast_days
            )));
        }
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "weather.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
