use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::ui::messages::warning;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::colors::colorize_total;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report = cmd {
        let store = open_store(cfg);
        let report = ReportLogic::load_report(&store, SystemClock.now(), cfg.week_start()?)?;
        print_report(&report);
    }
    Ok(())
}

/// Print the three totals, then one warning per skipped row.
pub(crate) fn print_report(report: &Report) {
    let t = &report.totals;

    println!();
    println!("Today:     {}", colorize_total(&t.today_hm()));
    println!("This week: {}", colorize_total(&t.this_week_hm()));
    println!("Last week: {}", colorize_total(&t.last_week_hm()));

    for skipped in &report.skipped {
        warning(format!("Skipped {skipped}"));
    }
}
