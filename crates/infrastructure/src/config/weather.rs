//! OpenWeatherMap configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeatherMap configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Base URL for condition icons
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("icon_base_url", &self.icon_base_url)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    30
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether an API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Replace the API key
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = SecretString::from(key.into());
    }

    /// Convert to `integration_weather`'s `WeatherConfig`
    #[must_use]
    pub fn to_client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().trim().to_string(),
            timeout_secs: self.timeout_secs,
            icon_base_url: self.icon_base_url.clone(),
        }
    }
}
