// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::IntervalExport;
use crate::export::{ExportFormat, ensure_writable};
use crate::models::interval::validate_row;
use crate::store::LogStore;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every completed interval of the log.
    ///
    /// Rows that do not validate (including a running timer) are left out
    /// with a warning.
    pub fn export(store: &LogStore, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let items = Self::collect(store)?;

        if items.is_empty() {
            warning("No completed intervals found. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&items, path),
            ExportFormat::Json => export_json(&items, path),
        }
    }

    pub fn collect(store: &LogStore) -> AppResult<Vec<IntervalExport>> {
        let mut items = Vec::new();

        for row in store.read_all()? {
            match validate_row(row.fields.as_slice()) {
                Ok(iv) => items.push(IntervalExport::from_interval(row.line, &iv)),
                Err(e) => warning(format!("Skipping line {}: {}", row.line, e)),
            }
        }

        Ok(items)
    }
}
