use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out, force } = cmd {
        ExportLogic::export(&open_store(cfg), format, out, *force)?;
    }
    Ok(())
}
