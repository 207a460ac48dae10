//! Open decoded URLs in the default browser, one call per URL.

use super::ActionError;
use crate::batch::BatchResult;
use crate::link::DecodedUrl;
use std::io;

/// What happened when handing URLs to the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenReport {
    pub opened: usize,
    /// Not an absolute URL; never handed to the opener.
    pub skipped: Vec<String>,
    /// The opener returned an error.
    pub failed: Vec<String>,
}

/// Opens every successful URL with the platform opener.
pub fn open_results(batch: &BatchResult, skip_non_url: bool) -> Result<OpenReport, ActionError> {
    open_results_with(batch, skip_non_url, |url| open::that(url))
}

/// Same as [`open_results`] with a caller-supplied opener.
pub fn open_results_with<F>(
    batch: &BatchResult,
    skip_non_url: bool,
    mut opener: F,
) -> Result<OpenReport, ActionError>
where
    F: FnMut(&str) -> io::Result<()>,
{
    if !batch.has_results() {
        return Err(ActionError::NoResults);
    }
    let mut report = OpenReport::default();
    for url in batch.successful_urls() {
        if skip_non_url && !DecodedUrl::new(url).is_absolute_url() {
            tracing::warn!(url, "not an absolute URL, not opening");
            report.skipped.push(url.to_string());
            continue;
        }
        match opener(url) {
            Ok(()) => report.opened += 1,
            Err(e) => {
                tracing::warn!(url, "failed to open in browser: {}", e);
                report.failed.push(url.to_string());
            }
        }
    }
    tracing::info!(
        opened = report.opened,
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "opened conversion results"
    );
    Ok(report)
}
