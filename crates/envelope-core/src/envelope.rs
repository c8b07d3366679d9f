// Rust guideline compliant 2026-10-18

//! Response envelope data model.

use crate::payload::{shape_error, shape_payload};
use crate::status::StatusClass;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Status metadata carried by every envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBlock {
    /// Numeric HTTP status code.
    pub code: u16,
    /// Human-readable message; the class phrase unless overridden.
    pub message: String,
    /// Number of results found.
    pub found: u64,
    /// Elapsed handling time in milliseconds.
    pub time_ms: Number,
}

/// Standard response envelope returned to API consumers.
///
/// `payload` and `error` are omitted from the JSON form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Status metadata.
    pub status: StatusBlock,
    /// Payload, or its item count when `found` was not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Structured error description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Optional inputs for building an envelope.
///
/// Every field has a safe default, so `ResponseParams::default()` is a valid
/// request for any status class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseParams {
    /// Message override; empty means "use the class phrase".
    pub message: String,
    /// Elapsed handling time in milliseconds.
    pub time_ms: f64,
    /// Explicit result count; zero collapses the payload to its item count.
    pub found: u64,
    /// Payload to attach.
    pub payload: Option<Value>,
    /// Error description to attach.
    pub error: Option<Value>,
}

impl ResponseParams {
    /// Creates parameters with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message override.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the elapsed time in milliseconds.
    #[must_use]
    pub fn time_ms(mut self, time_ms: f64) -> Self {
        self.time_ms = time_ms;
        self
    }

    /// Sets the explicit result count.
    #[must_use]
    pub fn found(mut self, found: u64) -> Self {
        self.found = found;
        self
    }

    /// Sets the payload.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Sets the error description.
    #[must_use]
    pub fn error(mut self, error: impl Into<Value>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl ResponseEnvelope {
    /// Shapes an envelope for a status class.
    ///
    /// This is the pure part of building: no hook is invoked.
    #[must_use]
    pub fn shape(class: StatusClass, params: ResponseParams) -> Self {
        let message = if params.message.is_empty() {
            class.phrase().to_string()
        } else {
            params.message
        };

        Self {
            status: StatusBlock {
                code: class.code(),
                message,
                found: params.found,
                time_ms: time_number(params.time_ms),
            },
            payload: shape_payload(params.payload, params.found),
            error: shape_error(params.error),
        }
    }
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts elapsed milliseconds to a JSON number.
///
/// Whole values become integers so `0` stays `0` on the wire. Non-finite
/// values have no JSON form and become `0`.
#[must_use]
pub fn time_number(ms: f64) -> Number {
    if !ms.is_finite() {
        return Number::from(0);
    }
    if ms.fract() == 0.0 && ms.abs() < MAX_EXACT_INTEGER {
        return Number::from(ms as i64);
    }
    Number::from_f64(ms).unwrap_or_else(|| Number::from(0))
}
