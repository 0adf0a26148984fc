//! Timestamp helpers.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings
//! (`2026-03-02T08:15:00Z`), so lexical order in SQL equals chronological
//! order.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, SecondsFormat, Utc};

pub fn to_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// UTC calendar day of a stored timestamp.
pub fn timestamp_date(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|dt| dt.date_naive())
}

/// Bounds `[monday 00:00, next monday 00:00)` of the ISO week containing `at`.
pub fn iso_week_bounds(at: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = at.date_naive();
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let start = monday.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(7))
}
