use crate::cli::commands::open_store;
use crate::cli::commands::report::print_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::time::{format_hms, format_timestamp};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let store = open_store(cfg);
        let status = TimerLogic::status(&store, &SystemClock)?;

        match status.running {
            Some((start, elapsed)) => {
                println!("{}", Colour::Green.bold().paint("● Running"));
                println!("{}", format_hms(elapsed));
                println!("\n--Current interval--\nFrom: {}", format_timestamp(&start));
            }
            None => println!("{}", Colour::White.dimmed().paint("▶ Stopped")),
        }

        if let Some(last) = status.last {
            println!(
                "\n--Last interval--\nFrom: {}\nTo:   {}",
                last.start_str(),
                last.end_str()
            );
        }

        let report = ReportLogic::load_report(&store, SystemClock.now(), cfg.week_start()?)?;
        print_report(&report);
    }
    Ok(())
}
