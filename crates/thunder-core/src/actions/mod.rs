//! Follow-on actions on a finished batch: save, copy, open.
//!
//! Every action takes the [`BatchResult`] it works on explicitly and only uses
//! its successful URLs.

pub mod browser;
pub mod clipboard;
pub mod save;

pub use browser::{open_results, OpenReport};
pub use clipboard::{copy_results, COPY_HOLDS_SELECTION};
pub use save::save_results;

use crate::batch::BatchResult;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// The batch has no successfully decoded URLs.
    #[error("no conversion results available")]
    NoResults,
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("clipboard: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Successful URLs joined by `\n` (no trailing newline).
pub fn results_text(batch: &BatchResult) -> Result<String, ActionError> {
    if !batch.has_results() {
        return Err(ActionError::NoResults);
    }
    Ok(batch.successful_urls().join("\n"))
}
