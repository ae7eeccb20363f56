//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout through [`render`]. The verbose log goes to stderr
//! through [`Log`], coloured with `termcolor` when stderr is a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    ast::Node,
    cli::args::{ColorMode, OutputFormat},
    engine::Reversal,
    errors::RevError,
};

// ============================================================================
// RESULT RENDERING
// ============================================================================

/// Renders a reversed tree for stdout.
pub fn render(tree: &Node, format: OutputFormat) -> Result<String, RevError> {
    match format {
        OutputFormat::Text => Ok(tree.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(tree)?),
    }
}

// ============================================================================
// VERBOSE LOG
// ============================================================================

/// Stderr status log, silent unless verbose output was requested.
pub struct Log {
    stream: Option<StandardStream>,
}

impl Log {
    pub fn new(verbose: bool, color: ColorMode) -> Self {
        let stream = verbose.then(|| StandardStream::stderr(color_choice(color)));
        Self { stream }
    }

    /// Logs a free-form status line.
    pub fn info(&mut self, message: &str) {
        if let Some(stream) = self.stream.as_mut() {
            let _ = write_tagged(stream, Color::Cyan, message);
        }
    }

    /// Logs the statistics of one reversed line.
    pub fn reversal(&mut self, reversal: &Reversal) {
        let message = format!(
            "{}: body `{}`, {} leaves, depth {}",
            reversal.source_name,
            reversal.body,
            reversal.tree.leaf_count(),
            reversal.tree.depth()
        );
        if let Some(stream) = self.stream.as_mut() {
            let _ = write_tagged(stream, Color::Green, &message);
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(atty::Stream::Stderr) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

fn write_tagged(stream: &mut StandardStream, color: Color, message: &str) -> std::io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stream, "[revnest]")?;
    stream.reset()?;
    writeln!(stream, " {}", message)
}
