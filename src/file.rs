// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportFormat;
use crate::data::Table;
use crate::error::ScrapeError;

/// Write header + rows to `path` (created/truncated). Parent dirs are created.
/// The header row is written even when `rows` is empty.
pub fn write_table<R: Table>(
    path: &Path,
    rows: &[R],
    format: ExportFormat,
) -> Result<PathBuf, ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_path(path)?;

    out.write_record(R::HEADERS)?;
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;

    info!(path = %path.display(), rows = rows.len(), "table written");
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
