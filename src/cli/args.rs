//! Defines the command-line arguments for the revnest CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "revnest",
    version,
    about = "Reverse a nested bracket list at every nesting level."
)]
pub struct RevnestArgs {
    /// Read input from this file instead of standard input.
    pub file: Option<PathBuf>,

    /// How to render each reversed list.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reverse every non-blank input line, not just the first.
    #[arg(short, long)]
    pub all_lines: bool,

    /// Log per-line statistics to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// When to colour the verbose log.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

/// Output rendering for a reversed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested list notation, e.g. `[5, [4, 3], 2, 1]`.
    Text,
    /// JSON arrays of one-character strings.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
