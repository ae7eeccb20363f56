//! Syntax module for revnest
//!
//! `line` frames the raw input line, `parser` turns the framed body into a
//! per-level reversed tree.

pub mod line;
pub mod parser;

pub use line::{list_body, ListBody};
pub use parser::parse;
