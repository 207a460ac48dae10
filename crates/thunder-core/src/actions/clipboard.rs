//! Copy decoded URLs to the system clipboard.

use super::{results_text, ActionError};
use crate::batch::BatchResult;
use arboard::Clipboard;

/// True where the clipboard contents only live as long as the process that
/// set them, so [`copy_results`] blocks until another program takes over.
pub const COPY_HOLDS_SELECTION: bool = cfg!(target_os = "linux");

/// Puts the newline-joined successful URLs on the clipboard and returns how
/// many were copied.
///
/// On Linux this returns only once another program (or a clipboard manager)
/// owns the selection.
pub fn copy_results(batch: &BatchResult) -> Result<usize, ActionError> {
    copy_results_with(batch, write_clipboard)
}

/// Same as [`copy_results`] with a caller-supplied clipboard writer.
pub fn copy_results_with<F>(batch: &BatchResult, write: F) -> Result<usize, ActionError>
where
    F: FnOnce(String) -> Result<(), arboard::Error>,
{
    let text = results_text(batch)?;
    write(text)?;
    let count = batch.success_count();
    tracing::info!(urls = count, "copied conversion results to clipboard");
    Ok(count)
}

#[cfg(target_os = "linux")]
fn write_clipboard(text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    // X11 and Wayland selections are served by their owner; dropping the
    // handle right away would leave the clipboard empty once we exit.
    let mut clipboard = Clipboard::new()?;
    clipboard.set().wait().text(text)?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn write_clipboard(text: String) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
