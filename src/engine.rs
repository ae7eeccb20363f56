//! revnest engine
//!
//! Ties input framing and the reversing parser together: raw text in,
//! reversed trees out. The CLI and the tests both go through here.

use crate::{
    ast::Node,
    errors::RevError,
    syntax::{list_body, parser},
};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// The outcome of reversing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    /// Diagnostic name of the line, e.g. `<stdin>` or `input.txt:3`.
    pub source_name: String,
    /// The list body that was parsed, outer brackets removed.
    pub body: String,
    /// The per-level reversed tree, always a `Node::List`.
    pub tree: Node,
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Frame, parse and reverse a single line.
pub fn reverse_line(line: &str, source_name: &str) -> Result<Reversal, RevError> {
    let framed = list_body(line, source_name)?;
    let tree = Node::from(parser::parse(framed.text));
    Ok(Reversal {
        source_name: source_name.to_string(),
        body: framed.text.to_string(),
        tree,
    })
}

/// Reverse the first line of `input`, or every non-blank line when
/// `all_lines` is set. Stops at the first line that fails to frame.
pub fn reverse_source(
    input: &str,
    source_name: &str,
    all_lines: bool,
) -> Result<Vec<Reversal>, RevError> {
    if !all_lines {
        let first = input.lines().next().unwrap_or("");
        return reverse_line(first, source_name).map(|r| vec![r]);
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| reverse_line(line, &format!("{}:{}", source_name, i + 1)))
        .collect()
}
