use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Guard for export and backup targets: an existing file is only replaced
/// with `force` or after a yes on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    confirm_replace(path, force, io::stdin().lock())
}

fn confirm_replace(path: &Path, force: bool, mut input: impl BufRead) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} exists", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush()?;

    let mut reply = String::new();
    input.read_line(&mut reply)?;

    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            debug!(path = %path.display(), "replacing existing file");
            Ok(())
        }
        _ => Err(AppError::Export(format!("{} left unchanged", path.display()))),
    }
}
