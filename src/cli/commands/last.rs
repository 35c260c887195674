use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Last = cmd {
        let (start, end) = open_store(cfg).get_last()?;
        println!("From: {start}");
        println!("To:   {end}");
    }
    Ok(())
}
