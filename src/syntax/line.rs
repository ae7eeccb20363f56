//! Input line framing
//!
//! Locates the outer list on a raw input line and hands back its body, the
//! text between the first `[` and the closing `]` at the end of the line.

use crate::errors::RevError;

/// The body of the outer list on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBody<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the line.
    pub offset: usize,
}

/// Strip the outer brackets (and the line terminator) from `line`.
///
/// Lines that do not start a list or do not end with `]` are rejected rather
/// than trimmed blindly.
pub fn list_body<'a>(line: &'a str, source_name: &str) -> Result<ListBody<'a>, RevError> {
    let trimmed = line.trim_end();
    if trimmed.trim_start().is_empty() {
        return Err(RevError::empty_input(source_name, line));
    }

    let open = trimmed
        .find('[')
        .ok_or_else(|| RevError::missing_open(source_name, line))?;

    if !trimmed.ends_with(']') {
        return Err(RevError::unterminated(source_name, line, trimmed.len()));
    }

    let start = open + 1;
    let end = trimmed.len() - 1;
    Ok(ListBody {
        text: &trimmed[start..end],
        offset: start,
    })
}
