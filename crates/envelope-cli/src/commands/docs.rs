// Rust guideline compliant 2026-10-18

//! Implementation of the `envl docs` command.
//!
//! Reads a JSON mapping of status names to example inputs and prints the
//! generated documentation blocks.

use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use envelope_core::{generate_docs_from_str, DocExamples};
use std::io::Read;

/// Generates documentation blocks from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not JSON or contains an unknown status.
pub fn run(source: &str) -> Result<DocExamples> {
    Ok(generate_docs_from_str(source)?)
}

/// Executes the docs command.
///
/// # Arguments
///
/// * `input` - Path to the examples file, or `-` for stdin
/// * `formatter` - Output formatter
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read
/// - The input is not a valid examples mapping
pub fn execute(input: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let source = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read examples from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read examples from {}", input))?
    };

    let docs = run(&source)?;
    println!("{}", formatter.format_docs(&docs));
    Ok(())
}
