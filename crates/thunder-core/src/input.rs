//! Turns raw pasted text into the line list the decoder expects.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no valid input links")]
    Empty,
}

/// Line boundaries recognised in pasted text: `\n`, `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL, and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` into lines, trims each one and drops blank lines.
/// Fails when nothing is left, so the decoder never sees an empty batch.
pub fn prepare_lines(text: &str) -> Result<Vec<String>, InputError> {
    let lines: Vec<String> = text
        .split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(lines)
}
