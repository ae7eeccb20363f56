//! The revnest Command-Line Interface.
//!
//! This module is the main entry point for the binary and orchestrates the
//! core library functions: read input, reverse, print.

use std::{
    fs,
    io::{self, BufRead, Read},
    process,
};

use clap::Parser;

use crate::{
    cli::{
        args::RevnestArgs,
        output::{render, Log},
    },
    engine,
    errors::{print_error, RevError},
};

pub mod args;
pub mod output;

const STDIN_NAME: &str = "<stdin>";

/// The main entry point for the CLI.
pub fn run() {
    let args = RevnestArgs::parse();

    if let Err(e) = execute(&args) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs one invocation, printing each reversed line to stdout.
pub fn execute(args: &RevnestArgs) -> Result<(), RevError> {
    let mut log = Log::new(args.verbose, args.color);
    let (input, source_name) = read_input(args)?;
    log.info(&format!("read {} bytes from {}", input.len(), source_name));

    for reversal in engine::reverse_source(&input, &source_name, args.all_lines)? {
        log.reversal(&reversal);
        println!("{}", render(&reversal.tree, args.format)?);
    }
    Ok(())
}

/// Standard input is read one line at a time unless every line is wanted.
fn read_input(args: &RevnestArgs) -> Result<(String, String), RevError> {
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)?;
        return Ok((content, path.display().to_string()));
    }

    let mut input = String::new();
    let stdin = io::stdin();
    if args.all_lines {
        stdin.lock().read_to_string(&mut input)?;
    } else {
        stdin.lock().read_line(&mut input)?;
    }
    Ok((input, STDIN_NAME.to_string()))
}
