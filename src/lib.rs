pub use crate::errors::RevError;

pub mod ast;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod syntax;
