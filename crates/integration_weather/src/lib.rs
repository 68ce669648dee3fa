//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions and the five-day, three-hour forecast feed
//! for a city name.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    Condition, CurrentMain, CurrentWeatherResponse, ForecastCity, ForecastEntry, ForecastMain,
    ForecastResponse, Sys, Wind, icon_url,
};
