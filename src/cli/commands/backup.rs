use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { out, compress } = cmd {
        BackupLogic::backup(&open_store(cfg), out, *compress)?;
    }

    Ok(())
}
