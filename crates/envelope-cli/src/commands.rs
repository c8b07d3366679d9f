// Rust guideline compliant 2026-10-18

//! Command implementations for the envelope CLI.

pub mod build;
pub mod docs;
pub mod statuses;
