//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API, queried by city name in
//! metric units.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeatherResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be set up
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Base URL for condition icons (default: <https://openweathermap.org/img/wn>)
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("icon_base_url", &self.icon_base_url)
            .finish()
    }
}

/// Weather client trait for fetching weather data by city
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError>;

    /// Get the three-hour forecast feed for a city
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status to an error
    fn check_status(status: StatusCode, city: &str) -> Result<(), WeatherError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized),
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(WeatherError::RateLimitExceeded),
            s if s.is_server_error() => Err(WeatherError::ServiceUnavailable(format!("HTTP {s}"))),
            s => Err(WeatherError::RequestFailed(format!("HTTP {s}"))),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, city = %city, "Fetching weather data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.without_url().to_string()))?;

        Self::check_status(response.status(), city)?;

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentWeatherResponse, WeatherError> {
        self.get_json("weather", city).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        self.get_json("forecast", city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenWeatherMapClient {
        OpenWeatherMapClient::new(WeatherConfig::default()).expect("client creation should succeed")
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.icon_base_url, "https://openweathermap.org/img/wn");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = WeatherConfig {
            api_key: "super-secret".to_string(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_config_partial_deserialization() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"api_key":"k","timeout_secs":5}"#).expect("should deserialize");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = OpenWeatherMapClient::new(WeatherConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        })
        .expect("client creation should succeed");
        assert_eq!(client.endpoint_url("weather"), "http://localhost:8080/weather");
        assert_eq!(client.config().base_url, "http://localhost:8080/");
    }

    #[test]
    fn test_check_status_mapping() {
        assert!(OpenWeatherMapClient::check_status(StatusCode::OK, "x").is_ok());
        assert!(matches!(
            OpenWeatherMapClient::check_status(StatusCode::UNAUTHORIZED, "x"),
            Err(WeatherError::Unauthorized)
        ));
        assert!(matches!(
            OpenWeatherMapClient::check_status(StatusCode::NOT_FOUND, "Atlantis"),
            Err(WeatherError::CityNotFound(city)) if city == "Atlantis"
        ));
        assert!(matches!(
            OpenWeatherMapClient::check_status(StatusCode::TOO_MANY_REQUESTS, "x"),
            Err(WeatherError::RateLimitExceeded)
        ));
        assert!(matches!(
            OpenWeatherMapClient::check_status(StatusCode::BAD_GATEWAY, "x"),
            Err(WeatherError::ServiceUnavailable(_))
        ));
        assert!(matches!(
            OpenWeatherMapClient::check_status(StatusCode::BAD_REQUEST, "x"),
            Err(WeatherError::RequestFailed(_))
        ));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::CityNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "City not found: Atlantis");

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.endpoint_url("forecast"), "https://api.openweathermap.org/data/2.5/forecast");
    }
}
