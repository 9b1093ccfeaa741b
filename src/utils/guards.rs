//! Type guards over [`Value`]

use crate::models::value::Value;

/// True only for `Value::Object`
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Emptiness check.
///
/// `false`, `0`, `""`, `[]` and `{}` are empty. `Null` and dates are not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Date(_) => false,
        Value::Bool(b) => !b,
        Value::Number(n) => *n == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Arrays pass through, anything else is wrapped in a one-item array
pub fn ensure_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_is_plain_object() {
        assert!(is_plain_object(&Value::from(json!({"a": 1}))));
        assert!(is_plain_object(&Value::object()));
        assert!(!is_plain_object(&Value::from(json!([1]))));
        assert!(!is_plain_object(&Value::from(Utc::now())));
        assert!(!is_plain_object(&Value::Null));
        assert!(!is_plain_object(&Value::from("{}")));
    }

    #[test]
    fn test_filters() {
        let items = Value::from(json!([1, "b", false, [1], null, 2]));
        let items = items.as_array().unwrap();

        assert_eq!(items.iter().filter(|v| is_number(v)).count(), 2);
        assert_eq!(items.iter().filter(|v| is_bool(v)).count(), 1);
        assert_eq!(items.iter().filter(|v| is_string(v)).count(), 1);
        assert_eq!(items.iter().filter(|v| is_array(v)).count(), 1);
        assert_eq!(items.iter().filter(|v| is_null(v)).count(), 1);
    }

    #[test]
    fn test_is_empty() {
        for empty in [json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_empty(&Value::from(empty)));
        }
        for full in [json!(null), json!(true), json!(1), json!("a"), json!([0]), json!({"a": 0})] {
            assert!(!is_empty(&Value::from(full)));
        }
    }

    #[test]
    fn test_ensure_array() {
        assert_eq!(ensure_array(Value::from("hello")), vec![Value::from("hello")]);
        assert_eq!(ensure_array(Value::from(json!(["hello"]))), vec![Value::from("hello")]);
    }
}
