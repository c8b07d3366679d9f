// Rust guideline compliant 2026-10-18

//! Implementation of the `envl statuses` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use envelope_core::StatusClass;

/// Executes the statuses command.
///
/// # Errors
///
/// This command does not fail; the result type matches the other commands.
pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", formatter.format_statuses(&StatusClass::ALL));
    Ok(())
}
