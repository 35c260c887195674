use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::interval::validate_row;
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let rows = open_store(cfg).read_all()?;

        if rows.is_empty() {
            println!("No intervals recorded yet.");
            return Ok(());
        }

        let skip = limit.map(|n| rows.len().saturating_sub(n)).unwrap_or(0);

        let mut table = Table::new(vec![
            Column::new("Line"),
            Column::new("Start"),
            Column::new("End"),
            Column::new("Worked"),
        ]);

        for row in rows.iter().skip(skip) {
            let cells = match validate_row(row.fields.as_slice()) {
                Ok(iv) => vec![
                    row.line.to_string(),
                    iv.start_str(),
                    iv.end_str(),
                    iv.duration().map(format_hm).unwrap_or_default(),
                ],
                Err(e) => vec![
                    row.line.to_string(),
                    row.fields.first().cloned().unwrap_or_default(),
                    row.fields.get(1).cloned().unwrap_or_else(|| "--".into()),
                    format!("{GREY}({e}){RESET}"),
                ],
            };
            table.add_row(cells);
        }

        print!("{}", table.render());
    }
    Ok(())
}
