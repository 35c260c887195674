use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::store::LogStore;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the time log to `dest_file`, optionally zipped. Returns the path
    /// of the file actually written.
    pub fn backup(store: &LogStore, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check the log exists
        if !src.exists() {
            return Err(AppError::StoreMissing(src.display().to_string()));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        ensure_writable(dest, false)?;

        // 4️⃣ Copy
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if !compress {
            return Ok(dest.to_path_buf());
        }

        // 5️⃣ Optional compression, the plain copy is removed afterwards
        let compressed = compress_backup(dest)?;
        if let Err(e) = fs::remove_file(dest) {
            warning(format!("Failed to remove uncompressed backup: {e}"));
        }

        Ok(compressed)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.csv".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
