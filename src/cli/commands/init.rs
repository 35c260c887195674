use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Writes the configuration file (skipped with `--test`). The time log
/// itself is created by the first `start`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.clone(), cli.week_start_day, cli.test)?;

    println!("⚙️  Initializing rTimetracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Time log    : {}", cfg.store_path().display());
    println!("📅 Week starts : {}", cfg.week_start()?);

    success("rTimetracker initialization completed!");
    Ok(())
}
