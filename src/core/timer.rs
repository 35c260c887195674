use crate::errors::{AppError, AppResult, RowError};
use crate::models::interval::{Interval, validate_row};
use crate::store::{LogState, LogStore};
use crate::utils::clock::Clock;
use crate::utils::time::{Timestamp, format_timestamp, parse_timestamp};
use chrono::TimeDelta;
use tracing::{info, warn};

/// Snapshot of the timer for `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerStatus {
    /// Start of the running interval and how long it has been running.
    pub running: Option<(Timestamp, TimeDelta)>,
    /// Most recent completed interval.
    pub last: Option<Interval>,
}

/// Start/stop of the single timer on top of the two-phase log append.
pub struct TimerLogic;

impl TimerLogic {
    /// Open a new interval at `at`, or now.
    pub fn start(store: &LogStore, clock: &dyn Clock, at: Option<Timestamp>) -> AppResult<Timestamp> {
        let start = at.unwrap_or_else(|| clock.now());
        store.begin_interval(start)?;
        info!(start = %format_timestamp(&start), "timer started");
        Ok(start)
    }

    /// Close the running interval at `at`, or now.
    ///
    /// Returns the closed interval, or `None` when the open row's start is not
    /// a valid timestamp (the row is still closed so the timer is released).
    pub fn stop(
        store: &LogStore,
        clock: &dyn Clock,
        at: Option<Timestamp>,
    ) -> AppResult<Option<Interval>> {
        let open_start = match store.state()? {
            LogState::Missing => return Err(AppError::StoreMissing(store.path().display().to_string())),
            LogState::Idle => {
                return Err(AppError::NoOpenInterval(store.path().display().to_string()));
            }
            LogState::Open { start } => start,
        };

        let end = at.unwrap_or_else(|| clock.now());
        let end_text = format_timestamp(&end);

        let closed = match parse_timestamp(&open_start) {
            Ok(start) if end < start => {
                return Err(RowError::InvalidField(format!(
                    "end {end_text} is before start {open_start}"
                ))
                .into());
            }
            Ok(start) => Some(Interval::closed(start, end)),
            Err(_) => {
                warn!(start = %open_start, "running interval has an unreadable start");
                None
            }
        };

        store.complete_interval(end)?;
        info!(end = %end_text, "timer stopped");
        Ok(closed)
    }

    pub fn status(store: &LogStore, clock: &dyn Clock) -> AppResult<TimerStatus> {
        let running = match store.state()? {
            LogState::Open { start } => match parse_timestamp(&start) {
                Ok(start) => Some((start, clock.now() - start)),
                Err(e) => {
                    warn!(%e, "running interval has an unreadable start");
                    None
                }
            },
            LogState::Missing | LogState::Idle => None,
        };

        let last = store
            .read_all()?
            .iter()
            .rev()
            .find_map(|row| validate_row(row.fields.as_slice()).ok());

        Ok(TimerStatus { running, last })
    }
}
