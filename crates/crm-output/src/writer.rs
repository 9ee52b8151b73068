//! Writing exported CSV text to disk.

use std::fs;
use std::path::Path;

use crm_model::ExportOptions;
use serde_json::Value;
use tracing::info;

use crate::csv::export_to_csv;
use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Exports `data` and writes the text to `path`, creating parent directories.
pub fn write_csv_file<S: AsRef<str>>(
    path: &Path,
    data: &[Value],
    columns: &[S],
    options: &ExportOptions,
) -> Result<()> {
    ensure_parent_dir(path)?;
    let text = export_to_csv(data, columns, options);
    fs::write(path, text.as_bytes()).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = data.len(), "wrote csv file");
    Ok(())
}
