//! Batch conversion: decode every line independently and tally the results.

use crate::link::{DecodedUrl, Decoder, LinkError};
use std::fmt;

/// One input line and what became of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: String,
    pub result: Result<DecodedUrl, LinkError>,
}

impl LineOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Renders the display line: the URL on success, otherwise
/// `# Error: <line> - <reason>`.
impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(url) => write!(f, "{}", url),
            Err(e) => write!(f, "# Error: {} - {}", self.line, e),
        }
    }
}

/// Outcomes in input order plus success/error tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    outcomes: Vec<LineOutcome>,
    success_count: usize,
    error_count: usize,
}

impl BatchResult {
    pub fn outcomes(&self) -> &[LineOutcome] {
        &self.outcomes
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Decoded URLs of the successful lines, in input order.
    pub fn successful_urls(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(DecodedUrl::as_str)
            .collect()
    }

    /// Whether the follow-on actions (copy, open, save) have anything to work on.
    pub fn has_results(&self) -> bool {
        self.success_count > 0
    }

    /// One display line per input line.
    pub fn render_lines(&self) -> Vec<String> {
        self.outcomes.iter().map(ToString::to_string).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Conversion complete: {} successful, {} failed",
            self.success_count, self.error_count
        )
    }

    fn push(&mut self, outcome: LineOutcome) {
        if outcome.is_ok() {
            self.success_count += 1;
        } else {
            self.error_count += 1;
        }
        self.outcomes.push(outcome);
    }
}

impl Decoder {
    /// Decodes every line; a failing line never stops the ones after it.
    pub fn decode_batch<S: AsRef<str>>(&self, lines: &[S]) -> BatchResult {
        let mut batch = BatchResult::default();
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let result = self.decode_link(line);
            match &result {
                Ok(url) => tracing::debug!(index, url = %url, "decoded thunder link"),
                Err(e) => tracing::warn!(index, kind = e.kind(), "rejected line: {}", e),
            }
            batch.push(LineOutcome {
                line: line.to_string(),
                result,
            });
        }
        tracing::info!(
            lines = batch.len(),
            ok = batch.success_count,
            failed = batch.error_count,
            "batch decoded"
        );
        batch
    }
}

/// Decodes a batch with the default empty-payload policy.
pub fn decode_batch<S: AsRef<str>>(lines: &[S]) -> BatchResult {
    Decoder::default().decode_batch(lines)
}
