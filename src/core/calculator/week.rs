//! Day and week boundaries used to bucket intervals.

use crate::errors::{AppError, AppResult};
use crate::utils::time::Timestamp;
use chrono::{Datelike, NaiveTime, TimeDelta, Weekday};

/// Map the configured 0=Sunday .. 6=Saturday index to a weekday.
pub fn weekday_from_index(index: i64) -> AppResult<Weekday> {
    let weekday = match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        other => return Err(AppError::InvalidWeekday(other)),
    };
    Ok(weekday)
}

/// Boundaries of the three report buckets, all at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub today_start: Timestamp,
    pub week_start: Timestamp,
    pub week_end: Timestamp,
    pub last_week_start: Timestamp,
}

pub fn bounds(now: Timestamp, week_start_day: Weekday) -> Bounds {
    let today_start = now.date().and_time(NaiveTime::MIN);

    let days_since_ref = (today_start.weekday().num_days_from_sunday() + 7
        - week_start_day.num_days_from_sunday())
        % 7;
    let week_start = today_start - TimeDelta::days(days_since_ref as i64);

    Bounds {
        today_start,
        week_start,
        week_end: week_start + TimeDelta::days(7),
        last_week_start: week_start - TimeDelta::days(7),
    }
}
