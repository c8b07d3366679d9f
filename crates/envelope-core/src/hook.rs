// Rust guideline compliant 2026-10-18

//! Logging hook invoked once per built envelope.

use crate::envelope::ResponseEnvelope;
use crate::error::HookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a response log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational, codes below 400.
    Info,
    /// Client error, codes 400 to 499.
    Error,
    /// Server error, codes 500 and above.
    Critical,
}

impl Severity {
    /// Selects the severity for a status code.
    #[must_use]
    pub fn for_code(code: u16) -> Self {
        match code {
            0..=399 => Severity::Info,
            400..=499 => Severity::Error,
            _ => Severity::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Receiver of response log events.
///
/// Failures are reported through the return value but never reach the
/// caller of the builder.
pub trait LogHook: Send + Sync {
    /// Records one built envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded.
    fn log(
        &self,
        severity: Severity,
        server_name: &str,
        code: u16,
        envelope: &ResponseEnvelope,
    ) -> Result<(), HookError>;
}

impl<F> LogHook for F
where
    F: Fn(Severity, &str, u16, &ResponseEnvelope) -> Result<(), HookError> + Send + Sync,
{
    fn log(
        &self,
        severity: Severity,
        server_name: &str,
        code: u16,
        envelope: &ResponseEnvelope,
    ) -> Result<(), HookError> {
        self(severity, server_name, code, envelope)
    }
}

/// Emits response events through `tracing`.
///
/// `tracing` has no critical level, so critical events are logged at error
/// level with `critical = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl LogHook for TracingHook {
    fn log(
        &self,
        severity: Severity,
        server_name: &str,
        code: u16,
        envelope: &ResponseEnvelope,
    ) -> Result<(), HookError> {
        let body = serde_json::to_string(envelope)?;
        match severity {
            Severity::Info => {
                tracing::info!(server = server_name, code, envelope = %body, "response built")
            }
            Severity::Error => {
                tracing::error!(server = server_name, code, envelope = %body, "response built")
            }
            Severity::Critical => tracing::error!(
                server = server_name,
                code,
                critical = true,
                envelope = %body,
                "response built"
            ),
        }
        Ok(())
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl LogHook for NoopHook {
    fn log(&self, _: Severity, _: &str, _: u16, _: &ResponseEnvelope) -> Result<(), HookError> {
        Ok(())
    }
}
