//! Weather service port
//!
//! Defines the interface for looking up weather by city name.

use async_trait::async_trait;
use domain::{CityName, CurrentConditions, ForecastSeries};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups by city
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions for a city
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Raw fixed-interval forecast feed for a city, with the city's UTC offset
    async fn forecast_series(&self, city: &CityName) -> Result<ForecastSeries, ApplicationError>;
}
