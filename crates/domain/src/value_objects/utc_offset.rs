//! Fixed UTC offset value object
//!
//! The provider reports one standing offset per city. It is applied to every
//! timestamp arithmetically; there is no DST lookup.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_HOUR: i64 = 3600;
const HOURS_PER_DAY: i64 = 24;

/// Signed offset from UTC in seconds
///
/// # Examples
///
/// ```
/// use domain::value_objects::UtcOffset;
///
/// let bangkok = UtcOffset::from_seconds(25_200);
/// assert_eq!(bangkok.local_hour(0), 7);
/// assert_eq!(bangkok.to_string(), "UTC+07:00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// Offset of zero seconds
    pub const UTC: Self = Self(0);

    /// Create an offset from signed seconds east of UTC
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self(seconds)
    }

    /// Offset in seconds
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.0
    }

    /// Shift a UTC timestamp into the city's local clock
    #[must_use]
    pub const fn local_timestamp(self, timestamp_utc: i64) -> i64 {
        timestamp_utc.saturating_add(self.0 as i64)
    }

    /// Local wall-clock hour (0-23) for a UTC timestamp
    #[must_use]
    pub const fn local_hour(self, timestamp_utc: i64) -> u8 {
        let local = self.local_timestamp(timestamp_utc);
        // rem_euclid keeps the result in 0..24, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hour = local.div_euclid(SECONDS_PER_HOUR).rem_euclid(HOURS_PER_DAY) as u8;
        hour
    }

    /// Local date and time for a UTC timestamp
    ///
    /// Returns `None` when the shifted timestamp is outside chrono's range.
    #[must_use]
    pub fn local_datetime(self, timestamp_utc: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp(self.local_timestamp(timestamp_utc), 0).map(|dt| dt.naive_utc())
    }
}

impl From<i32> for UtcOffset {
    fn from(seconds: i32) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn default_is_utc() {
        assert_eq!(UtcOffset::default(), UtcOffset::UTC);
        assert_eq!(UtcOffset::UTC.seconds(), 0);
    }

    #[test]
    fn local_hour_positive_offset() {
        // 2024-01-01T00:00:00Z
        let ts = 1_704_067_200;
        assert_eq!(UtcOffset::from_seconds(25_200).local_hour(ts), 7);
        assert_eq!(UtcOffset::UTC.local_hour(ts), 0);
    }

    #[test]
    fn local_hour_negative_offset_wraps() {
        let ts = 1_704_067_200;
        assert_eq!(UtcOffset::from_seconds(-18_000).local_hour(ts), 19);
    }

    #[test]
    fn local_hour_before_epoch() {
        // 1969-12-31T23:00:00Z
        assert_eq!(UtcOffset::UTC.local_hour(-3600), 23);
    }

    #[test]
    fn local_datetime_crosses_day_boundary() {
        // 2024-01-01T20:00:00Z at UTC+7 is 2024-01-02T03:00 local
        let ts = 1_704_067_200 + 20 * 3600;
        let local = UtcOffset::from_seconds(25_200).local_datetime(ts).unwrap();
        assert_eq!(local.date().day(), 2);
        assert_eq!(local.hour(), 3);
    }

    #[test]
    fn local_datetime_out_of_range() {
        assert!(UtcOffset::UTC.local_datetime(i64::MAX - 1).is_none());
    }

    #[test]
    fn display_formats_sign_and_minutes() {
        assert_eq!(UtcOffset::from_seconds(25_200).to_string(), "UTC+07:00");
        assert_eq!(UtcOffset::from_seconds(-16_200).to_string(), "UTC-04:30");
        assert_eq!(UtcOffset::UTC.to_string(), "UTC+00:00");
    }

    #[test]
    fn serializes_as_plain_seconds() {
        let json = serde_json::to_string(&UtcOffset::from_seconds(3600)).unwrap();
        assert_eq!(json, "3600");
        let back: UtcOffset = serde_json::from_str("-3600").unwrap();
        assert_eq!(back.seconds(), -3600);
    }
}
