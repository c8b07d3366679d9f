// Rust guideline compliant 2026-10-18

//! Output formatting module for the envelope CLI.
//!
//! This module renders envelopes, documentation blocks and the status table
//! in various output formats (JSON, table, plain text).

use envelope_core::{DocExamples, ResponseEnvelope, StatusClass, JSON_MEDIA_TYPE};
use serde_json::{json, Value};
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single envelope.
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String;

    /// Formats a documentation mapping.
    fn format_docs(&self, docs: &DocExamples) -> String;

    /// Formats the list of known status classes.
    fn format_statuses(&self, classes: &[StatusClass]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn compact(value: Option<&Value>) -> String {
    value.map_or_else(|| "-".to_string(), Value::to_string)
}

/// JSON output formatter.
///
/// Emits the exact wire shape, pretty-printed.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        serde_json::to_string_pretty(envelope)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize envelope" }).to_string())
    }

    fn format_docs(&self, docs: &DocExamples) -> String {
        serde_json::to_string_pretty(docs)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize docs" }).to_string())
    }

    fn format_statuses(&self, classes: &[StatusClass]) -> String {
        let rows: Vec<Value> = classes
            .iter()
            .map(|class| {
                json!({
                    "code": class.code(),
                    "name": class.name(),
                    "phrase": class.phrase(),
                })
            })
            .collect();
        let output = json!({
            "statuses": rows,
            "total": classes.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize statuses" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Field", "Value"]);
        builder.push_record(vec!["code".to_string(), envelope.status.code.to_string()]);
        builder.push_record(vec!["message".to_string(), envelope.status.message.clone()]);
        builder.push_record(vec!["found".to_string(), envelope.status.found.to_string()]);
        builder.push_record(vec!["time_ms".to_string(), envelope.status.time_ms.to_string()]);
        builder.push_record(vec!["payload".to_string(), compact(envelope.payload.as_ref())]);
        builder.push_record(vec!["error".to_string(), compact(envelope.error.as_ref())]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_docs(&self, docs: &DocExamples) -> String {
        if docs.is_empty() {
            return "No examples.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Code", "Description", "Payload", "Error"]);
        for (code, doc) in docs {
            let example = doc.examples.get(JSON_MEDIA_TYPE);
            builder.push_record(vec![
                code.clone(),
                doc.description.clone(),
                compact(example.and_then(|e| e.payload.as_ref())),
                compact(example.and_then(|e| e.error.as_ref())),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_statuses(&self, classes: &[StatusClass]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Code", "Name", "Phrase"]);
        for class in classes {
            builder.push_record(vec![
                class.code().to_string(),
                class.name().to_string(),
                class.phrase().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_envelope(&self, envelope: &ResponseEnvelope) -> String {
        let mut output = format!(
            "{} {} found={} time_ms={}\n",
            envelope.status.code,
            envelope.status.message,
            envelope.status.found,
            envelope.status.time_ms
        );
        if let Some(payload) = &envelope.payload {
            output.push_str(&format!("payload {}\n", payload));
        }
        if let Some(error) = &envelope.error {
            output.push_str(&format!("error {}\n", error));
        }
        output
    }

    fn format_docs(&self, docs: &DocExamples) -> String {
        let mut output = String::new();
        for (code, doc) in docs {
            output.push_str(&format!("{} {}\n", code, doc.description));
        }
        output
    }

    fn format_statuses(&self, classes: &[StatusClass]) -> String {
        let mut output = String::new();
        for class in classes {
            output.push_str(&format!("{} {} {}\n", class.code(), class.name(), class.phrase()));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
