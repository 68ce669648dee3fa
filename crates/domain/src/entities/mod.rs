//! Domain entities - Weather observations and derived summaries

mod daily_summary;
mod weather;

pub use daily_summary::DailySummary;
pub use weather::{CurrentConditions, ForecastPoint, ForecastSeries, WeatherCondition};
