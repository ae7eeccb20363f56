//! revnest error handling
//!
//! The reversing parser itself never fails. Everything that can go wrong lives
//! at the edges: framing the input line, reading input, encoding output. Each
//! failure is a [`RevError`] carrying a `miette` diagnostic code, and the
//! framing errors carry the offending line so the report can point into it.

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// Every failure mode of a revnest run.
#[derive(Debug, Error, Diagnostic)]
pub enum RevError {
    #[error("empty input: expected a bracketed list")]
    #[diagnostic(
        code(revnest::input::empty),
        help("provide one line such as `[1,2,[3,4],5]`")
    )]
    EmptyInput {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("input has no opening `[`")]
    #[diagnostic(
        code(revnest::input::missing_open),
        help("the list must start with `[`")
    )]
    MissingOpenBracket {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `[` here")]
        span: SourceSpan,
    },

    #[error("input does not end with `]`")]
    #[diagnostic(
        code(revnest::input::unterminated),
        help("the last character of the line must close the outer list")
    )]
    UnterminatedList {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `]` to end the line")]
        span: SourceSpan,
    },

    #[error("I/O error: {0}")]
    #[diagnostic(code(revnest::io))]
    Io(#[from] std::io::Error),

    #[error("failed to encode result as JSON: {0}")]
    #[diagnostic(code(revnest::output::json))]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl RevError {
    pub fn empty_input(source_name: &str, line: &str) -> Self {
        RevError::EmptyInput {
            src: named(source_name, line),
        }
    }

    pub fn missing_open(source_name: &str, line: &str) -> Self {
        RevError::MissingOpenBracket {
            src: named(source_name, line),
            span: (0, line.chars().next().map_or(0, char::len_utf8)).into(),
        }
    }

    /// `end` is the byte offset just past the last non-whitespace character.
    pub fn unterminated(source_name: &str, line: &str, end: usize) -> Self {
        let last = line[..end].chars().next_back().map_or(0, char::len_utf8);
        RevError::UnterminatedList {
            src: named(source_name, line),
            span: (end - last, last).into(),
        }
    }
}

fn named(source_name: &str, line: &str) -> NamedSource<String> {
    NamedSource::new(source_name, line.to_string())
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a RevError with full miette diagnostics to stderr.
pub fn print_error(error: RevError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
