// Rust guideline compliant 2026-10-18

//! Payload emptiness and collapse-to-count rules.
//!
//! A payload is "present" only when it is truthy:
//!
//! - `null` is always empty
//! - `false` and numeric zero are empty
//! - strings, arrays and objects are empty at length zero
//!
//! When no explicit `found` count is given, a present payload is replaced by
//! its item count. Scalars have no item count and are kept as-is.

use serde_json::Value;

/// Returns true if the value counts as a supplied payload or error.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the number of items in a collection-like value.
///
/// Strings count characters, arrays count elements, objects count keys.
/// Returns `None` for null, booleans and numbers.
#[must_use]
pub fn item_count(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Shapes a payload for the envelope.
///
/// # Arguments
///
/// * `payload` - The supplied payload, if any
/// * `found` - Explicit result count; zero means "not given"
///
/// # Returns
///
/// `None` when the payload is absent or falsy, the item count when `found`
/// is zero and the payload is countable, otherwise the payload unchanged.
#[must_use]
pub fn shape_payload(payload: Option<Value>, found: u64) -> Option<Value> {
    let payload = payload.filter(is_truthy)?;
    if found != 0 {
        return Some(payload);
    }
    match item_count(&payload) {
        Some(count) => Some(Value::from(count)),
        None => Some(payload),
    }
}

/// Keeps an error description only if it is truthy.
#[must_use]
pub fn shape_error(error: Option<Value>) -> Option<Value> {
    error.filter(is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&value), "{} should be falsy", value);
        }
    }

    #[test]
    fn test_truthy_values() {
        for value in [json!(true), json!(-1), json!(0.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
    }

    #[test]
    fn test_collapse_array_to_count() {
        assert_eq!(shape_payload(Some(json!([1, 2, 3])), 0), Some(json!(3)));
    }

    #[test]
    fn test_collapse_object_counts_keys() {
        assert_eq!(shape_payload(Some(json!({"a": 1, "b": 2})), 0), Some(json!(2)));
    }

    #[test]
    fn test_collapse_string_counts_chars() {
        assert_eq!(shape_payload(Some(json!("héllo")), 0), Some(json!(5)));
    }

    #[test]
    fn test_explicit_found_keeps_payload() {
        let payload = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(shape_payload(Some(payload.clone()), 2), Some(payload));
    }

    #[test]
    fn test_scalar_payload_kept_when_found_zero() {
        assert_eq!(shape_payload(Some(json!(42)), 0), Some(json!(42)));
        assert_eq!(shape_payload(Some(json!(true)), 0), Some(json!(true)));
    }

    #[test]
    fn test_falsy_payload_dropped_regardless_of_found() {
        assert_eq!(shape_payload(Some(json!([])), 5), None);
        assert_eq!(shape_payload(Some(json!(null)), 0), None);
        assert_eq!(shape_payload(None, 3), None);
    }

    #[test]
    fn test_shape_error() {
        assert_eq!(shape_error(Some(json!({}))), None);
        assert_eq!(shape_error(Some(json!({"type": "x"}))), Some(json!({"type": "x"})));
    }
}
