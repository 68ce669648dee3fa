//! Display preferences

use domain::{ColorMode, DEFAULT_FORECAST_DAYS, ThemePalette};
use serde::{Deserialize, Serialize};

/// Largest forecast length the three-hour feed can fill
pub const MAX_FORECAST_DAYS: usize = 5;

/// Initial theme, color mode and forecast length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Theme palette (default: classic)
    #[serde(default)]
    pub theme: ThemePalette,

    /// Color mode (default: light)
    #[serde(default)]
    pub mode: ColorMode,

    /// Number of daily forecast entries (1-5, default: 5)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

const fn default_forecast_days() -> usize {
    DEFAULT_FORECAST_DAYS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemePalette::default(),
            mode: ColorMode::default(),
            forecast_days: default_forecast_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.theme, ThemePalette::Classic);
        assert_eq!(config.mode, ColorMode::Light);
        assert_eq!(config.forecast_days, MAX_FORECAST_DAYS);
    }

    #[test]
    fn partial_deserialization() {
        let config: DisplayConfig = serde_json::from_str(r#"{"theme":"aurora"}"#).unwrap();
        assert_eq!(config.theme, ThemePalette::Aurora);
        assert_eq!(config.mode, ColorMode::Light);
        assert_eq!(config.forecast_days, 5);
    }
}
