//! Time utilities: the fixed timestamp layout of the log, duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Layout of every timestamp in the log: `HH:MM:SS YYYY/MM/DD`.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %Y/%m/%d";

/// A wall-clock instant in the process's local zone, second resolution.
pub type Timestamp = NaiveDateTime;

// chrono accepts single-digit fields for %H/%m/%d; the log layout does not.
static TIMESTAMP_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2} \d{4}/\d{2}/\d{2}$").unwrap());

/// Parse a timestamp written with [`TIMESTAMP_FORMAT`]. No partial parse.
pub fn parse_timestamp(text: &str) -> AppResult<Timestamp> {
    if !TIMESTAMP_SHAPE.is_match(text) {
        return Err(AppError::InvalidTimestamp(text.to_string()));
    }

    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(text.to_string()))
}

pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<Timestamp>> {
    input.map(|s| parse_timestamp(s)).transpose()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now_local() -> Timestamp {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Whole minutes as `HH:MM`. Seconds are dropped, not rounded.
pub fn format_hm(d: TimeDelta) -> String {
    let total_minutes = d.num_minutes();
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Elapsed time as `HH:MM:SS`, used for a running timer.
pub fn format_hms(d: TimeDelta) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
