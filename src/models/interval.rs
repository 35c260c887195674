use crate::errors::RowError;
use crate::utils::time::{Timestamp, format_timestamp, parse_timestamp};
use chrono::TimeDelta;

/// One timed work session read back from the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: Timestamp,
    pub end: Option<Timestamp>,
}

impl Interval {
    pub fn closed(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }

    pub fn start_str(&self) -> String {
        format_timestamp(&self.start)
    }

    pub fn end_str(&self) -> String {
        self.end.as_ref().map(format_timestamp).unwrap_or_default()
    }
}

/// Turn the raw fields of a log row into a completed interval.
///
/// Requires exactly two non-empty fields, both in the log layout, with
/// `end >= start`.
pub fn validate_row<S: AsRef<str>>(fields: &[S]) -> Result<Interval, RowError> {
    let [start, end] = fields else {
        return Err(RowError::IncompleteRow);
    };
    let (start, end) = (start.as_ref(), end.as_ref());

    if start.is_empty() || end.is_empty() {
        return Err(RowError::IncompleteRow);
    }

    let start_ts =
        parse_timestamp(start).map_err(|_| RowError::InvalidField(start.to_string()))?;
    let end_ts = parse_timestamp(end).map_err(|_| RowError::InvalidField(end.to_string()))?;

    if end_ts < start_ts {
        return Err(RowError::InvalidField(format!(
            "end {end} is before start {start}"
        )));
    }

    Ok(Interval::closed(start_ts, end_ts))
}
