use crate::errors::RowError;
use crate::utils::time::format_hm;
use chrono::TimeDelta;
use std::fmt;

/// Accumulated worked time per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub today: TimeDelta,
    pub this_week: TimeDelta,
    pub last_week: TimeDelta,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            today: TimeDelta::zero(),
            this_week: TimeDelta::zero(),
            last_week: TimeDelta::zero(),
        }
    }
}

impl Totals {
    pub fn today_hm(&self) -> String {
        format_hm(self.today)
    }

    pub fn this_week_hm(&self) -> String {
        format_hm(self.this_week)
    }

    pub fn last_week_hm(&self) -> String {
        format_hm(self.last_week)
    }
}

/// A row left out of the totals, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: RowError,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Totals plus the diagnostics collected while scanning the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub totals: Totals,
    pub skipped: Vec<SkippedRow>,
}
