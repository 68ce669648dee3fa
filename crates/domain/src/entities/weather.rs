//! Weather observations and forecast samples

use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, UtcOffset};

/// Provider condition: category label, free-text description and icon id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Short category label, e.g. "Clear" or "Rain"
    pub main: String,
    /// Human-readable description, e.g. "light rain"
    pub description: String,
    /// Provider icon identifier, e.g. "10d"
    pub icon: String,
}

impl WeatherCondition {
    /// Create a condition
    #[must_use]
    pub fn new(
        main: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            main: main.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// One fixed-interval forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Nominal sample time, seconds since epoch (UTC)
    pub timestamp_utc: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Condition at this time
    pub condition: WeatherCondition,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

/// Raw forecast feed for one city
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Samples in ascending timestamp order
    pub points: Vec<ForecastPoint>,
    /// City offset from the provider's city metadata, if present
    pub utc_offset: Option<UtcOffset>,
}

impl ForecastSeries {
    /// Offset to bucket by, zero when the provider omitted it
    #[must_use]
    pub fn offset_or_utc(&self) -> UtcOffset {
        self.utc_offset.unwrap_or_default()
    }
}

/// Current conditions snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved city name
    pub city: String,
    /// ISO country code, may be empty
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Dominant condition
    pub condition: WeatherCondition,
}

impl CurrentConditions {
    /// "City, CC" label, or just the city when the country is unknown
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}
