//! One forecast entry per local calendar day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weather::ForecastPoint;

/// Representative forecast sample for one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date in the city's local time
    pub local_date: NaiveDate,
    /// Sample closest to local noon on that date
    pub representative: ForecastPoint,
    /// Local hour (0-23) of the representative sample
    pub local_hour: u8,
}

impl DailySummary {
    /// Short weekday label such as "Mon"
    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.local_date.format("%a").to_string()
    }

    /// Distance of the representative sample from local noon, in hours
    #[must_use]
    pub const fn hours_from_noon(&self) -> u8 {
        self.local_hour.abs_diff(12)
    }
}
