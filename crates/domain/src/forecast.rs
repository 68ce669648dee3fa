//! Daily forecast reduction
//!
//! Collapses the provider's 3-hourly feed into one entry per local calendar
//! day. Dates are derived by adding the city's fixed offset to each UTC
//! timestamp and reading the result as if it were UTC. No timezone database
//! is consulted, so day boundaries follow the offset exactly.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::NaiveDate;

use crate::entities::{DailySummary, ForecastPoint};
use crate::value_objects::UtcOffset;

/// Number of days shown by the forecast strip
pub const DEFAULT_FORECAST_DAYS: usize = 5;

const LOCAL_NOON: u8 = 12;

/// Reduce a chronological forecast feed to at most `max_days` daily summaries
///
/// For each local date the sample closest to local noon is kept; on a tie the
/// earlier sample wins. Days appear in the order their first sample appears
/// in `points`. The input is never re-sorted.
///
/// Samples whose shifted timestamp cannot be represented as a date are
/// skipped.
///
/// # Examples
///
/// ```
/// use domain::{ForecastPoint, UtcOffset, WeatherCondition, reduce_daily};
///
/// let point = |ts| ForecastPoint {
///     timestamp_utc: ts,
///     temperature: 20.0,
///     feels_like: 20.0,
///     condition: WeatherCondition::new("Clear", "clear sky", "01d"),
///     wind_speed: 0.0,
/// };
/// // 09:00 and 13:00 UTC on 2024-01-01
/// let days = reduce_daily(&[point(1_704_099_600), point(1_704_114_000)], UtcOffset::UTC, 5);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].local_hour, 13);
/// ```
#[must_use]
pub fn reduce_daily(
    points: &[ForecastPoint],
    offset: UtcOffset,
    max_days: usize,
) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::new();
    let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for point in points {
        let Some(local) = offset.local_datetime(point.timestamp_utc) else {
            continue;
        };
        let local_hour = offset.local_hour(point.timestamp_utc);

        match by_date.entry(local.date()) {
            Entry::Vacant(slot) => {
                slot.insert(days.len());
                days.push(DailySummary {
                    local_date: local.date(),
                    representative: point.clone(),
                    local_hour,
                });
            },
            Entry::Occupied(slot) => {
                let best = &mut days[*slot.get()];
                // strict: ties keep the earlier sample
                if local_hour.abs_diff(LOCAL_NOON) < best.hours_from_noon() {
                    best.representative = point.clone();
                    best.local_hour = local_hour;
                }
            },
        }
    }

    days.truncate(max_days);
    days
}
