use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::SystemClock;
use crate::utils::time::{format_timestamp, parse_optional_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { at } = cmd {
        let store = open_store(cfg);
        let at = parse_optional_timestamp(at.as_ref())?;

        let start = TimerLogic::start(&store, &SystemClock, at)?;
        success(format!("⏱️  Timer started at {}", format_timestamp(&start)));
    }
    Ok(())
}
