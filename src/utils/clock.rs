use crate::utils::time::{Timestamp, now_local};

/// Source of "now" for the timer and the reports, so tests can pin it.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Local wall clock, second resolution.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now_local()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
