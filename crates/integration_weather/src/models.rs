//! OpenWeatherMap response models
//!
//! Only the fields the application reads are modeled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// One entry of the `weather` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition group (e.g. "Rain", "Clear")
    pub main: String,
    /// Human-readable description (e.g. "light rain")
    pub description: String,
    /// Icon code (e.g. "10d")
    pub icon: String,
}

/// `main` block of the current weather payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMain {
    /// Temperature in °C
    pub temp: f64,
    /// Perceived temperature in °C
    pub feels_like: f64,
    /// Relative humidity in %
    pub humidity: u8,
    /// Sea-level pressure in hPa
    pub pressure: u32,
}

/// `wind` block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
}

/// `sys` block of the current weather payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sys {
    /// ISO 3166 country code
    #[serde(default)]
    pub country: String,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    /// Temperature, humidity and pressure readings
    pub main: CurrentMain,
    /// Weather conditions, first entry is the primary one
    pub weather: Vec<Condition>,
    /// Wind readings
    pub wind: Wind,
    /// Resolved city name
    pub name: String,
    /// Country metadata
    #[serde(default)]
    pub sys: Sys,
}

impl CurrentWeatherResponse {
    /// Primary weather condition
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// `main` block of a forecast entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    /// Temperature in °C
    pub temp: f64,
    /// Perceived temperature in °C
    pub feels_like: f64,
}

/// One three-hour sample of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Sample time, Unix seconds UTC
    pub dt: i64,
    /// Temperature readings
    pub main: ForecastMain,
    /// Weather conditions, first entry is the primary one
    pub weather: Vec<Condition>,
    /// Wind readings
    pub wind: Wind,
}

impl ForecastEntry {
    /// Primary weather condition
    #[must_use]
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// City metadata embedded in the forecast payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastCity {
    /// City name
    #[serde(default)]
    pub name: Option<String>,
    /// ISO 3166 country code
    #[serde(default)]
    pub country: Option<String>,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Samples in ascending time order
    pub list: Vec<ForecastEntry>,
    /// City metadata
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

impl ForecastResponse {
    /// City UTC offset in seconds, if the payload carries one
    #[must_use]
    pub fn timezone_offset(&self) -> Option<i32> {
        self.city.as_ref().and_then(|city| city.timezone)
    }
}

/// URL of the large rendition of a condition icon
#[must_use]
pub fn icon_url(base: &str, icon: &str) -> String {
    format!("{}/{icon}@4x.png", base.trim_end_matches('/'))
}
