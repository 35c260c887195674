use crate::errors::{AppResult, RowError};
use crate::models::interval::Interval;
use crate::store::LogStore;
use crate::utils::time::parse_timestamp;
use tracing::info;

/// Correction of the most recent completed interval.
pub struct EditLogic;

impl EditLogic {
    /// Replace the last interval with `new_start`/`new_end`.
    ///
    /// The last row must be complete, and both texts must be valid
    /// timestamps with `end >= start`; otherwise the log is not touched.
    pub fn edit_last_interval(
        store: &LogStore,
        new_start: &str,
        new_end: &str,
    ) -> AppResult<Interval> {
        let (old_start, old_end) = store.get_last()?;

        let start = parse_timestamp(new_start)?;
        let end = parse_timestamp(new_end)?;
        if end < start {
            return Err(RowError::InvalidField(format!(
                "end {new_end} is before start {new_start}"
            ))
            .into());
        }

        store.replace_last(new_start, new_end)?;

        info!(%old_start, %old_end, new_start, new_end, "last interval edited");
        Ok(Interval::closed(start, end))
    }
}
