//! Lenient date parsing with a wall-clock fallback.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Parses a host-supplied date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `YYYY-MM` (resolved to the
/// first of the month) and integer millisecond timestamps.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").ok())
        .or_else(|| {
            trimmed
                .parse::<i64>()
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Parses a host-supplied date, falling back to today's local date.
#[must_use]
pub fn parse_date_or_today(input: &str) -> NaiveDate {
    parse_date(input).unwrap_or_else(|| {
        tracing::debug!("unparseable date '{input}', falling back to today");
        Local::now().date_naive()
    })
}
