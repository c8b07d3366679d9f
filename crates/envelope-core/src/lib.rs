// Rust guideline compliant 2026-10-18

//! Envelope Core Library
//!
//! This crate builds standardized HTTP API response envelopes and derives
//! API documentation examples from them:
//! - Status table (codes, phrases, symbolic names, aliases)
//! - Payload truthiness and collapse-to-count rules
//! - Response builder with one entry point per status and a log hook
//! - Documentation example generator
//! - Configuration and error types

pub mod builder;
pub mod config;
pub mod docs;
pub mod envelope;
pub mod error;
pub mod hook;
pub mod payload;
pub mod status;

pub use builder::ResponseBuilder;
pub use config::EnvelopeConfig;
pub use docs::{
    doc_example, generate_docs, generate_docs_from_json, generate_docs_from_str, DocExample,
    DocExampleInput, DocExamples, JSON_MEDIA_TYPE,
};
pub use envelope::{time_number, ResponseEnvelope, ResponseParams, StatusBlock};
pub use error::{Error, HookError, Result};
pub use hook::{LogHook, NoopHook, Severity, TracingHook};
pub use status::StatusClass;
