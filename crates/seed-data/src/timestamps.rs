//! Date and timestamp parsing for snapshot records.
//!
//! Snapshot timestamps are written either as RFC 3339 values or as naive
//! local-less values such as `2023-05-08T09:30:00`; naive values are read as
//! UTC. Join dates are plain `YYYY-MM-DD` calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
const JOIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a snapshot timestamp, returning `None` when no format matches.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parses a `YYYY-MM-DD` join date.
pub(crate) fn parse_join_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, JOIN_DATE_FORMAT).ok()
}
