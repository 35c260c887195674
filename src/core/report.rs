use crate::core::calculator::totals::compute_totals;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::store::LogStore;
use crate::utils::time::Timestamp;
use chrono::Weekday;

pub struct ReportLogic;

impl ReportLogic {
    /// Read the whole log and bucket it. A missing log gives zero totals.
    pub fn load_report(store: &LogStore, now: Timestamp, week_start_day: Weekday) -> AppResult<Report> {
        let rows = store.read_all()?;
        Ok(compute_totals(&rows, now, week_start_day))
    }
}
