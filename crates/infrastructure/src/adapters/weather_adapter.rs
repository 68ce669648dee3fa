//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{
    CityName, CurrentConditions, ForecastPoint, ForecastSeries, Humidity, UtcOffset,
    WeatherCondition,
};
use integration_weather::{
    Condition, CurrentWeatherResponse, ForecastEntry, ForecastResponse, OpenWeatherMapClient,
    WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::RequestFailed(e) | WeatherError::ServiceUnavailable(e) => {
                ApplicationError::ExternalService(e)
            },
            WeatherError::Unauthorized => {
                ApplicationError::ExternalService("API key rejected by weather service".into())
            },
            WeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            WeatherError::ConnectionFailed(e) | WeatherError::ParseError(e) => {
                ApplicationError::Internal(e)
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert the primary condition, failing when the payload has none
    fn map_condition(condition: Option<&Condition>) -> Result<WeatherCondition, ApplicationError> {
        condition
            .map(|c| WeatherCondition::new(&c.main, &c.description, &c.icon))
            .ok_or_else(|| ApplicationError::Internal("Response has no weather condition".into()))
    }

    /// Convert integration current weather to domain current conditions
    fn map_current(current: &CurrentWeatherResponse) -> Result<CurrentConditions, ApplicationError> {
        Ok(CurrentConditions {
            city: current.name.clone(),
            country: current.sys.country.clone(),
            temperature: current.main.temp,
            feels_like: current.main.feels_like,
            humidity: Humidity::clamped(current.main.humidity),
            pressure: current.main.pressure,
            wind_speed: current.wind.speed,
            condition: Self::map_condition(current.primary_condition())?,
        })
    }

    /// Convert one forecast sample
    fn map_point(entry: &ForecastEntry) -> Result<ForecastPoint, ApplicationError> {
        Ok(ForecastPoint {
            timestamp_utc: entry.dt,
            temperature: entry.main.temp,
            feels_like: entry.main.feels_like,
            condition: Self::map_condition(entry.primary_condition())?,
            wind_speed: entry.wind.speed,
        })
    }

    /// Convert integration forecast to the domain series
    fn map_forecast(forecast: &ForecastResponse) -> Result<ForecastSeries, ApplicationError> {
        let points = forecast
            .list
            .iter()
            .map(Self::map_point)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ForecastSeries {
            points,
            utc_offset: forecast.timezone_offset().map(UtcOffset::from_seconds),
        })
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self, city), fields(city = %city))]
    async fn current_conditions(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .get_current(city.as_str())
            .await
            .map_err(Self::map_error)
            .and_then(|current| Self::map_current(&current));

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    condition = %current.condition.main,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self, city), fields(city = %city))]
    async fn forecast_series(&self, city: &CityName) -> Result<ForecastSeries, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.as_str())
            .await
            .map_err(Self::map_error)
            .and_then(|forecast| Self::map_forecast(&forecast));

        match &result {
            Ok(series) => {
                debug!(
                    points = series.points.len(),
                    utc_offset = ?series.utc_offset,
                    "Retrieved forecast feed"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result
    }
}
