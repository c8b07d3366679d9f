// Rust guideline compliant 2026-10-18

//! Implementation of the `envl build` command.
//!
//! Builds one envelope for a named status and prints it.

use crate::output::OutputFormatter;
use anyhow::{ensure, Context, Result};
use envelope_core::{ResponseBuilder, ResponseEnvelope, ResponseParams, StatusClass};
use serde_json::Value;

/// Arguments of the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Status name or alias.
    pub status: String,
    /// Message override.
    pub message: Option<String>,
    /// Elapsed time in milliseconds.
    pub time_ms: Option<f64>,
    /// Explicit result count.
    pub found: Option<u64>,
    /// Payload as JSON text.
    pub payload: Option<String>,
    /// Error description as JSON text.
    pub error: Option<String>,
}

/// Builds the envelope described by `args`.
///
/// # Errors
///
/// Returns an error if the status name is unknown, the elapsed time is not
/// finite, or the payload or error is not valid JSON.
pub fn run(builder: &ResponseBuilder, args: BuildArgs) -> Result<ResponseEnvelope> {
    let class = StatusClass::resolve(&args.status)?;
    if let Some(ms) = args.time_ms {
        ensure!(ms.is_finite(), "Invalid --time-ms: {} is not a finite number", ms);
    }

    let mut params = ResponseParams::new()
        .message(args.message.unwrap_or_default())
        .time_ms(args.time_ms.unwrap_or_default())
        .found(args.found.unwrap_or_default());
    if let Some(text) = args.payload {
        params.payload = Some(parse_json(&text).context("Invalid --payload")?);
    }
    if let Some(text) = args.error {
        params.error = Some(parse_json(&text).context("Invalid --error")?);
    }

    Ok(builder.build(class, params))
}

/// Executes the build command.
///
/// # Errors
///
/// Returns an error if the envelope cannot be built from the arguments.
pub fn execute(
    builder: &ResponseBuilder,
    args: BuildArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let envelope = run(builder, args)?;
    println!("{}", formatter.format_envelope(&envelope));
    Ok(())
}

fn parse_json(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_core::{EnvelopeConfig, NoopHook};
    use serde_json::json;

    fn builder() -> ResponseBuilder {
        ResponseBuilder::with_hook(&EnvelopeConfig::default(), NoopHook)
    }

    #[test]
    fn test_run_resolves_alias() {
        let args = BuildArgs {
            status: "redirect".to_string(),
            time_ms: Some(30.0),
            ..BuildArgs::default()
        };
        let envelope = run(&builder(), args).unwrap();
        assert_eq!(envelope.status.code, 302);
        assert_eq!(envelope.status.time_ms, serde_json::Number::from(30));
    }

    #[test]
    fn test_run_rejects_non_finite_time() {
        for ms in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let args = BuildArgs {
                status: "ok".to_string(),
                time_ms: Some(ms),
                ..BuildArgs::default()
            };
            let err = run(&builder(), args).unwrap_err();
            assert!(err.to_string().contains("--time-ms"), "{}", err);
        }
    }

    #[test]
    fn test_run_keeps_fractional_time() {
        let args = BuildArgs {
            status: "ok".to_string(),
            time_ms: Some(12.5),
            ..BuildArgs::default()
        };
        let envelope = run(&builder(), args).unwrap();
        assert_eq!(envelope.status.time_ms.as_f64(), Some(12.5));
    }

    #[test]
    fn test_run_parses_payload() {
        let args = BuildArgs {
            status: "ok".to_string(),
            payload: Some("[1, 2, 3]".to_string()),
            ..BuildArgs::default()
        };
        let envelope = run(&builder(), args).unwrap();
        assert_eq!(envelope.payload, Some(json!(3)));
    }

    #[test]
    fn test_run_rejects_bad_json() {
        let args = BuildArgs {
            status: "bad_request".to_string(),
            error: Some("{not json".to_string()),
            ..BuildArgs::default()
        };
        let err = run(&builder(), args).unwrap_err();
        assert!(err.to_string().contains("--error"));
    }

    #[test]
    fn test_run_rejects_unknown_status() {
        let args = BuildArgs {
            status: "teapot".to_string(),
            ..BuildArgs::default()
        };
        assert!(run(&builder(), args).is_err());
    }
}
