use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time::format_hm;

/// Handle the `edit` command: an omitted field keeps its current value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { start, end } = cmd {
        if start.is_none() && end.is_none() {
            return Err(AppError::Other(
                "Nothing to do: specify --start and/or --end.".into(),
            ));
        }

        let store = open_store(cfg);
        let (cur_start, cur_end) = store.get_last()?;

        let new_start = start.as_deref().unwrap_or(&cur_start);
        let new_end = end.as_deref().unwrap_or(&cur_end);

        let iv = EditLogic::edit_last_interval(&store, new_start, new_end)?;
        success(format!(
            "✏️  Last interval updated: {} → {} ({})",
            iv.start_str(),
            iv.end_str(),
            iv.duration().map(format_hm).unwrap_or_default()
        ));
    }
    Ok(())
}
