// Rust guideline compliant 2026-10-18

//! Property-based tests for envelope shaping and status lookup.

use envelope_core::{
    EnvelopeConfig, NoopHook, ResponseBuilder, ResponseParams, StatusClass,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn quiet_builder() -> ResponseBuilder {
    ResponseBuilder::with_hook(&EnvelopeConfig::default(), NoopHook)
}

/// Generates arbitrary status classes.
fn arb_class() -> impl Strategy<Value = StatusClass> {
    (0..StatusClass::ALL.len()).prop_map(|i| StatusClass::ALL[i])
}

/// Generates non-empty JSON arrays of small records.
fn arb_rows() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(
        (any::<u32>(), "[a-z]{0,8}").prop_map(|(id, name)| json!({"id": id, "name": name})),
        1..20,
    )
}

/// Generates falsy payload values.
fn arb_falsy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        Just(json!([])),
        Just(json!({})),
        Just(json!(0)),
        Just(json!("")),
        Just(json!(false)),
    ]
}

proptest! {
    /// A non-empty sequence with no explicit count collapses to its length.
    #[test]
    fn test_sequence_collapses_to_length(rows in arb_rows()) {
        let len = rows.len();
        let envelope = quiet_builder().ok(ResponseParams::new().payload(rows));
        prop_assert_eq!(envelope.payload, Some(json!(len)));
    }

    /// A non-empty sequence with an explicit count is returned unchanged.
    #[test]
    fn test_sequence_kept_with_found(rows in arb_rows(), found in 1u64..1000) {
        let payload = Value::Array(rows);
        let envelope = quiet_builder().ok(ResponseParams::new().found(found).payload(payload.clone()));
        prop_assert_eq!(envelope.payload, Some(payload));
        prop_assert_eq!(envelope.status.found, found);
    }

    /// Falsy payloads never produce a payload key.
    #[test]
    fn test_falsy_payload_never_present(payload in arb_falsy(), found in 0u64..5, class in arb_class()) {
        let envelope = quiet_builder().build(class, ResponseParams::new().found(found).payload(payload));
        let value = serde_json::to_value(&envelope).unwrap();
        prop_assert!(value.get("payload").is_none());
    }

    /// Message and timing pass through untouched.
    #[test]
    fn test_message_and_time_pass_through(
        class in arb_class(),
        message in "[a-zA-Z ]{1,40}",
        time_ms in 0.0f64..10_000.0,
    ) {
        let envelope = quiet_builder().build(
            class,
            ResponseParams::new().message(message.clone()).time_ms(time_ms),
        );
        prop_assert_eq!(envelope.status.code, class.code());
        prop_assert_eq!(envelope.status.message, message);
        prop_assert_eq!(envelope.status.time_ms.as_f64(), Some(time_ms));
    }

    /// Symbolic names resolve in any letter case.
    #[test]
    fn test_resolve_any_case(class in arb_class(), mask in prop::collection::vec(any::<bool>(), 32)) {
        let name: String = class
            .name()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(StatusClass::resolve(&name).unwrap(), class);
    }

    /// Building is idempotent for identical inputs.
    #[test]
    fn test_build_idempotent(class in arb_class(), rows in arb_rows(), found in 0u64..3) {
        let builder = quiet_builder();
        let params = ResponseParams::new().found(found).payload(rows);
        prop_assert_eq!(builder.build(class, params.clone()), builder.build(class, params));
    }
}
