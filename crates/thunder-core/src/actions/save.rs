//! Save decoded URLs to a plain text file.

use super::{results_text, ActionError};
use crate::batch::BatchResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Appends `.<extension>` unless `path` already ends with it (case-insensitive).
pub fn with_extension(path: &Path, extension: &str) -> PathBuf {
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if has_ext || extension.is_empty() {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Writes the successful URLs of `batch`, newline-joined UTF-8, and returns
/// the path actually written.
pub fn save_results(
    path: &Path,
    batch: &BatchResult,
    extension: &str,
) -> Result<PathBuf, ActionError> {
    let text = results_text(batch)?;
    let target = with_extension(path, extension);
    fs::write(&target, text).map_err(|source| ActionError::Write {
        path: target.clone(),
        source,
    })?;
    tracing::info!(
        path = %target.display(),
        urls = batch.success_count(),
        "saved conversion results"
    );
    Ok(target)
}
