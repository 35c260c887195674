use crate::cli::commands::open_store;
use crate::cli::commands::report::print_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::time::{format_hm, parse_optional_timestamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { at } = cmd {
        let store = open_store(cfg);
        let at = parse_optional_timestamp(at.as_ref())?;
        let week_start = cfg.week_start()?;

        match TimerLogic::stop(&store, &SystemClock, at)? {
            Some(iv) => success(format!(
                "⏹️  Timer stopped: {} → {} ({})",
                iv.start_str(),
                iv.end_str(),
                iv.duration().map(format_hm).unwrap_or_default()
            )),
            None => warning("Timer stopped, but its start time was unreadable."),
        }

        let report = ReportLogic::load_report(&store, SystemClock.now(), week_start)?;
        print_report(&report);
    }
    Ok(())
}
