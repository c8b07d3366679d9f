// Rust guideline compliant 2026-10-18

//! API documentation example blocks derived from response envelopes.
//!
//! Each entry of the input mapping names a status (case-insensitive,
//! alias-aware) and optionally supplies an example payload and error. The
//! output is keyed by the numeric code as a string, in the shape expected by
//! OpenAPI `responses` objects:
//!
//! ```json
//! {"400": {"description": "BAD_REQUEST", "examples": {"application/json": {...}}}}
//! ```

use crate::envelope::{ResponseEnvelope, ResponseParams};
use crate::payload::is_truthy;
use crate::status::StatusClass;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Media type under which example envelopes are published.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Elapsed time shown in every documentation example.
const EXAMPLE_TIME_MS: f64 = 1.0;

/// Example inputs for one documented status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocExampleInput {
    /// Example payload.
    #[serde(default)]
    pub payload: Option<Value>,
    /// Example error description.
    #[serde(default)]
    pub error: Option<Value>,
}

/// Documentation block for one status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocExample {
    /// Symbolic status name, e.g. `NOT_FOUND`.
    pub description: String,
    /// Example envelopes keyed by media type.
    pub examples: BTreeMap<String, ResponseEnvelope>,
}

/// Documentation blocks keyed by status code string.
pub type DocExamples = BTreeMap<String, DocExample>;

/// Default error shown for bad requests that supply none.
fn default_bad_request_error() -> Value {
    json!({
        "message": "param_name: expected str, string must be input",
        "type": "type_error",
    })
}

/// Builds the documentation block for a single resolved status.
#[must_use]
pub fn doc_example(class: StatusClass, input: DocExampleInput) -> DocExample {
    let error = match (class, input.error) {
        (StatusClass::BadRequest, error) if !error.as_ref().is_some_and(is_truthy) => {
            Some(default_bad_request_error())
        }
        (_, error) => error,
    };
    let found = u64::from(class == StatusClass::Ok);

    let params = ResponseParams {
        message: String::new(),
        time_ms: EXAMPLE_TIME_MS,
        found,
        payload: input.payload,
        error,
    };
    let envelope = ResponseEnvelope::shape(class, params);

    DocExample {
        description: class.name().to_string(),
        examples: BTreeMap::from([(JSON_MEDIA_TYPE.to_string(), envelope)]),
    }
}

/// Generates documentation blocks for a mapping of status names.
///
/// # Arguments
///
/// * `examples` - Pairs of status name and optional example inputs
///
/// # Returns
///
/// One block per entry keyed by code string. When two names resolve to the
/// same code, the later one wins.
///
/// # Errors
///
/// Returns [`Error::UnknownStatus`] for the first name that cannot be
/// resolved.
pub fn generate_docs<I, K>(examples: I) -> Result<DocExamples>
where
    I: IntoIterator<Item = (K, Option<DocExampleInput>)>,
    K: AsRef<str>,
{
    let mut docs = DocExamples::new();
    for (name, input) in examples {
        let class = StatusClass::resolve(name.as_ref())?;
        let block = doc_example(class, input.unwrap_or_default());
        docs.insert(class.code().to_string(), block);
    }
    Ok(docs)
}

/// Generates documentation blocks from a JSON object.
///
/// Each value must be `null` or an object with optional `payload` and
/// `error` keys.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the value is not an object or an entry
/// has the wrong shape, and [`Error::UnknownStatus`] for unresolvable names.
pub fn generate_docs_from_json(examples: &Value) -> Result<DocExamples> {
    let map = examples
        .as_object()
        .ok_or_else(|| Error::InvalidInput("examples must be a JSON object".to_string()))?;

    let mut entries = Vec::with_capacity(map.len());
    for (name, value) in map {
        let input: Option<DocExampleInput> = serde_json::from_value(value.clone())
            .map_err(|e| Error::InvalidInput(format!("entry '{}': {}", name, e)))?;
        entries.push((name.as_str(), input));
    }

    generate_docs(entries)
}

/// Generates documentation blocks from JSON text.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not JSON, otherwise the errors of
/// [`generate_docs_from_json`].
pub fn generate_docs_from_str(source: &str) -> Result<DocExamples> {
    let examples: Value = serde_json::from_str(source)?;
    generate_docs_from_json(&examples)
}
