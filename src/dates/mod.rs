//! Month-granularity date arithmetic backed by `chrono`.
//!
//! The window engine reasons about months, but the values it passes around
//! keep a day of month so that fractional month differences and day lookups
//! inside a month page stay meaningful. Month addition clamps the day to the
//! length of the target month, so `Jan 31 + 1 month` lands on the last day of
//! February.

mod page;
mod parse;

use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub use page::{month_page, week_index};
pub use parse::{parse_date, parse_date_or_today};

/// Label format used for placeholder rows (e.g. `Mar 2024`).
const LABEL_FORMAT: &str = "%b %Y";

/// A calendar date treated at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthDate(NaiveDate);

impl MonthDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the 1-based calendar month.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Shifts the date by a signed number of months, clamping the day.
    ///
    /// Shifts that would leave chrono's representable range return the date
    /// unchanged.
    #[must_use]
    pub fn add_months(self, months: i64) -> Self {
        let Ok(magnitude) = u32::try_from(months.unsigned_abs()) else {
            return self;
        };
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(magnitude))
        } else {
            self.0.checked_sub_months(Months::new(magnitude))
        };
        shifted.map_or(self, Self)
    }

    /// Returns the first day of this date's month.
    #[must_use]
    pub fn start_of_month(self) -> Self {
        self.0.with_day(1).map_or(self, Self)
    }

    /// Returns the signed, fractional number of months from `self` to `other`.
    ///
    /// The whole part counts calendar month boundaries. The fractional part
    /// is the remaining day distance divided by the length of the month that
    /// starts (or, for negative remainders, ends) at the pivot date.
    #[must_use]
    pub fn months_between(self, other: Self) -> f64 {
        let whole = i64::from(other.year() - self.year()) * 12 + i64::from(other.month())
            - i64::from(self.month());
        let pivot = self.add_months(whole);
        let remainder = (other.0 - pivot.0).num_days();
        if remainder == 0 {
            return to_f64(whole);
        }

        let span = if remainder > 0 {
            (pivot.add_months(1).0 - pivot.0).num_days()
        } else {
            (pivot.0 - pivot.add_months(-1).0).num_days()
        };
        if span == 0 {
            return to_f64(whole);
        }

        to_f64(whole) + to_f64(remainder) / to_f64(span)
    }

    /// Formats the placeholder label for this month.
    #[must_use]
    pub fn label(self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }

    /// Projects the date into the host-facing [`DateData`] shape.
    #[must_use]
    pub fn to_date_data(self) -> DateData {
        DateData::from(self.0)
    }
}

impl From<NaiveDate> for MonthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Date value reported to the host in visibility notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateData {
    /// Calendar year.
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Milliseconds since the Unix epoch at UTC midnight.
    pub timestamp: i64,
    /// ISO 8601 date string (`YYYY-MM-DD`).
    pub date_string: String,
}

impl From<NaiveDate> for DateData {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            timestamp: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
            date_string: date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "month and day counts stay far below 2^52"
)]
const fn to_f64(value: i64) -> f64 {
    value as f64
}
