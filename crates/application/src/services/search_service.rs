//! City weather search
//!
//! Fetches current conditions and the raw forecast feed concurrently, then
//! reduces the feed to one representative entry per local day.

use std::fmt;
use std::sync::Arc;

use domain::{CityName, DEFAULT_FORECAST_DAYS, reduce_daily};
use tracing::{debug, info, instrument, warn};

use super::display::{DisplayState, SearchOutcome};
use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// What happened to a submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Blank input or a search already in flight; nothing was fetched
    Skipped,
    /// Both fetches succeeded and the state was populated
    Loaded,
    /// A fetch failed and the state now carries the failure message
    Failed,
}

/// Looks up weather for a city and feeds the result into the display state
pub struct SearchService {
    weather: Arc<dyn WeatherPort>,
    max_days: usize,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("max_days", &self.max_days)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a search service over a weather port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            max_days: DEFAULT_FORECAST_DAYS,
        }
    }

    /// Limit the number of daily entries returned
    #[must_use]
    pub const fn with_max_days(mut self, max_days: usize) -> Self {
        self.max_days = max_days;
        self
    }

    /// Maximum number of daily entries returned
    #[must_use]
    pub const fn max_days(&self) -> usize {
        self.max_days
    }

    /// Search by raw user input
    ///
    /// Blank input is rejected before any request is issued.
    #[instrument(skip(self))]
    pub async fn search(&self, city: &str) -> Result<SearchOutcome, ApplicationError> {
        let city = CityName::new(city).map_err(|e| ApplicationError::InvalidInput(e.to_string()))?;
        self.search_city(&city).await
    }

    /// Search by an already validated city name
    ///
    /// Both requests are issued together. If either fails the whole search
    /// fails and no partial result is returned.
    #[instrument(skip(self, city), fields(city = %city))]
    pub async fn search_city(&self, city: &CityName) -> Result<SearchOutcome, ApplicationError> {
        let (current, series) = tokio::try_join!(
            self.weather.current_conditions(city),
            self.weather.forecast_series(city)
        )?;

        let utc_offset = series.offset_or_utc();
        let daily = reduce_daily(&series.points, utc_offset, self.max_days);

        debug!(
            points = series.points.len(),
            days = daily.len(),
            utc_offset = %utc_offset,
            "Reduced forecast feed"
        );

        Ok(SearchOutcome {
            current,
            daily,
            utc_offset,
        })
    }

    /// Run a search for the city currently entered in `state`
    ///
    /// Failures never escape: they end up as the state's error message.
    pub async fn submit(&self, state: &mut DisplayState) -> SubmitStatus {
        self.submit_with(state, |_| {}).await
    }

    /// Like [`Self::submit`], calling `on_loading` once the state is loading
    ///
    /// `on_loading` is not called when the search is skipped.
    pub async fn submit_with<F>(&self, state: &mut DisplayState, on_loading: F) -> SubmitStatus
    where
        F: FnOnce(&DisplayState),
    {
        let Some((ticket, city)) = state.begin_search() else {
            debug!("Search skipped");
            return SubmitStatus::Skipped;
        };
        on_loading(state);

        let result = self.search_city(&city).await;
        let status = match &result {
            Ok(outcome) => {
                info!(city = %city, days = outcome.daily.len(), "Weather loaded");
                SubmitStatus::Loaded
            },
            Err(e) => {
                warn!(city = %city, error = %e, "Weather search failed");
                SubmitStatus::Failed
            },
        };
        state.finish_search(ticket, result);
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use crate::services::display::{DisplayAction, FETCH_FAILURE_MESSAGE};
    use domain::{
        CurrentConditions, ForecastPoint, ForecastSeries, Humidity, UtcOffset, WeatherCondition,
    };

    fn current() -> CurrentConditions {
        CurrentConditions {
            city: "Hanoi".to_string(),
            country: "VN".to_string(),
            temperature: 24.6,
            feels_like: 25.1,
            humidity: Humidity::clamped(88),
            pressure: 1011,
            wind_speed: 2.4,
            condition: WeatherCondition::new("Clouds", "broken clouds", "04d"),
        }
    }

    /// 40 samples, three hours apart, starting 2024-01-01T00:00:00Z
    fn series(utc_offset: Option<UtcOffset>) -> ForecastSeries {
        let points = (0..40)
            .map(|i| ForecastPoint {
                timestamp_utc: 1_704_067_200 + i * 10_800,
                temperature: 20.0,
                feels_like: 19.5,
                condition: WeatherCondition::new("Rain", "light rain", "10d"),
                wind_speed: 3.1,
            })
            .collect();
        ForecastSeries { points, utc_offset }
    }

    fn state_with(city: &str) -> DisplayState {
        let mut state = DisplayState::default();
        state.apply(DisplayAction::EditCity(city.to_string()));
        state
    }

    #[tokio::test]
    async fn search_combines_both_fetches() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .times(1)
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .times(1)
            .returning(|_| Ok(series(Some(UtcOffset::from_seconds(25_200)))));

        let service = SearchService::new(Arc::new(mock));
        let outcome = service.search("Hanoi").await.unwrap();

        assert_eq!(outcome.current.city, "Hanoi");
        assert_eq!(outcome.daily.len(), 5);
        assert_eq!(outcome.utc_offset.seconds(), 25_200);
        for day in &outcome.daily {
            assert!(day.hours_from_noon() <= 1);
        }
    }

    #[tokio::test]
    async fn search_passes_trimmed_city() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .withf(|city| city.as_str() == "Hanoi")
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .withf(|city| city.as_str() == "Hanoi")
            .returning(|_| Ok(series(None)));

        let service = SearchService::new(Arc::new(mock));
        assert!(service.search("  Hanoi ").await.is_ok());
    }

    #[tokio::test]
    async fn missing_offset_defaults_to_utc() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Ok(series(None)));

        let service = SearchService::new(Arc::new(mock));
        let outcome = service.search("Hanoi").await.unwrap();

        assert_eq!(outcome.utc_offset, UtcOffset::UTC);
        assert!(outcome.daily.iter().all(|day| day.local_hour == 12));
    }

    #[tokio::test]
    async fn max_days_limits_output() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Ok(series(None)));

        let service = SearchService::new(Arc::new(mock)).with_max_days(2);
        let outcome = service.search("Hanoi").await.unwrap();
        assert_eq!(outcome.daily.len(), 2);
    }

    #[tokio::test]
    async fn blank_search_is_invalid_input() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions().never();
        mock.expect_forecast_series().never();

        let service = SearchService::new(Arc::new(mock));
        let err = service.search("   ").await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn forecast_failure_fails_whole_search() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".into())));

        let service = SearchService::new(Arc::new(mock));
        let err = service.search("Hanoi").await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(msg) if msg == "HTTP 503"));
    }

    #[tokio::test]
    async fn submit_populates_state() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Ok(series(Some(UtcOffset::from_seconds(3600)))));

        let service = SearchService::new(Arc::new(mock));
        let mut state = state_with("Hanoi");

        assert_eq!(service.submit(&mut state).await, SubmitStatus::Loaded);
        assert!(!state.is_loading());
        assert!(state.has_data());
        assert_eq!(state.daily().len(), 5);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn submit_failure_clears_state_and_sets_message() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Err(ApplicationError::NotFound("Atlantis".into())));

        let service = SearchService::new(Arc::new(mock));
        let mut state = state_with("Atlantis");

        assert_eq!(service.submit(&mut state).await, SubmitStatus::Failed);
        assert!(!state.is_loading());
        assert!(state.current().is_none());
        assert!(state.daily().is_empty());
        assert_eq!(state.error(), Some(FETCH_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn submit_blank_input_makes_no_calls() {
        for input in ["", "   "] {
            let mut mock = MockWeatherPort::new();
            mock.expect_current_conditions().never();
            mock.expect_forecast_series().never();

            let service = SearchService::new(Arc::new(mock));
            let mut state = state_with(input);
            let before = state.clone();

            assert_eq!(service.submit(&mut state).await, SubmitStatus::Skipped);
            assert_eq!(state, before);
        }
    }

    #[tokio::test]
    async fn submit_with_reports_loading_state() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(current()));
        mock.expect_forecast_series()
            .returning(|_| Ok(series(None)));

        let service = SearchService::new(Arc::new(mock));
        let mut state = state_with("Hanoi");
        let mut seen = None;

        let status = service
            .submit_with(&mut state, |loading| {
                seen = Some((loading.is_loading(), loading.has_data()));
            })
            .await;

        assert_eq!(status, SubmitStatus::Loaded);
        assert_eq!(seen, Some((true, false)));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn submit_with_skipped_search_never_calls_hook() {
        let service = SearchService::new(Arc::new(MockWeatherPort::new()));
        let mut state = state_with("  ");
        let mut called = false;

        let status = service.submit_with(&mut state, |_| called = true).await;

        assert_eq!(status, SubmitStatus::Skipped);
        assert!(!called);
    }

    #[test]
    fn debug_hides_port() {
        let service = SearchService::new(Arc::new(MockWeatherPort::new())).with_max_days(3);
        let debug = format!("{service:?}");
        assert!(debug.contains("SearchService"));
        assert!(debug.contains("max_days: 3"));
        assert_eq!(service.max_days(), 3);
    }
}
