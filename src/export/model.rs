// src/export/model.rs

use crate::models::interval::Interval;
use serde::Serialize;

/// Flat view of a completed interval for CSV / JSON output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntervalExport {
    pub line: u64,
    pub start: String,
    pub end: String,
    pub minutes: i64,
}

impl IntervalExport {
    pub fn from_interval(line: u64, iv: &Interval) -> Self {
        Self {
            line,
            start: iv.start_str(),
            end: iv.end_str(),
            minutes: iv.duration().map(|d| d.num_minutes()).unwrap_or(0),
        }
    }
}
