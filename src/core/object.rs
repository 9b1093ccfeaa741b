//! Structural Object Utilities
//!
//! Deep equality, right-biased recursive merge, cloning, flat-to-nested
//! conversion and nested lookups over [`Value`] trees.

use tracing::debug;

use crate::models::config::{ArrayPolicy, MergeOptions, NestedOptions};
use crate::models::value::{Object, Value};

/// Deep structural equality.
///
/// Dates compare by epoch millisecond, arrays element-wise, objects by key
/// count and per-key equality. Values of different kinds are never equal.
/// `NaN` equals `NaN` so that [`Value`] can implement `Eq`.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }

    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x.timestamp_millis() == y.timestamp_millis(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| is_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, v)| ys.get(k).is_some_and(|other| is_equal(v, other)))
        }
        _ => false,
    }
}

/// Recursive right-biased merge of `source` into `target`.
///
/// Neither input is modified; the merged tree is returned. Objects merge
/// key by key, arrays follow `options.array_policy`, anything else from
/// `source` replaces the target unless it is `Null` and `skip_nulls` is set.
pub fn merge(target: &Value, source: &Value, options: &MergeOptions) -> Value {
    merge_slot(Some(target), source, options).unwrap_or_else(|| target.clone())
}

fn merge_slot(target: Option<&Value>, source: &Value, options: &MergeOptions) -> Option<Value> {
    match (target, source) {
        (_, Value::Null) if options.skip_nulls => target.cloned(),
        (Some(Value::Object(t)), Value::Object(s)) => {
            let mut merged = t.clone();
            for (key, source_value) in s {
                if let Some(value) = merge_slot(t.get(key), source_value, options) {
                    merged.insert(key.clone(), value);
                }
            }
            Some(Value::Object(merged))
        }
        (Some(Value::Array(t)), Value::Array(s)) => {
            let merged = match &options.array_policy {
                ArrayPolicy::Overwrite => s.clone(),
                ArrayPolicy::Merge => t.iter().chain(s.iter()).cloned().collect(),
                ArrayPolicy::Custom(f) => f(t, s),
            };
            Some(Value::Array(merged))
        }
        _ => Some(source.clone()),
    }
}

/// Copy a value.
///
/// `Value` owns its children, so both modes return a tree that shares
/// nothing with the input; `recursive = false` copies containers with a
/// single `clone` while `recursive = true` rebuilds every nested container.
pub fn clone_value(value: &Value, recursive: bool) -> Value {
    if !recursive {
        return value.clone();
    }
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| clone_value(v, true)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), clone_value(v, true)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Default value transform: strings holding JSON are parsed, everything
/// else (including strings that fail to parse) passes through.
pub fn parse_json_or_raw(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::parse_json(text).unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

/// Build a nested object from flat `separator`-joined keys.
///
/// Entries are merged in ascending path length, so `a.b` overrides a `b`
/// coming from an `a` entry. Keys with an empty segment after
/// `transform_key` are dropped.
///
/// ```
/// use ruster_kit::{convert_to_nested, NestedOptions, Value};
/// use serde_json::json;
///
/// let nested = convert_to_nested(
///     [("a.b", Value::from(2)), ("a", Value::from(r#"{"b": 1}"#))],
///     &NestedOptions::default(),
/// );
/// assert_eq!(nested, Value::from(json!({"a": {"b": 2}})));
/// ```
pub fn convert_to_nested<I, K, V>(flat: I, options: &NestedOptions) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut entries: Vec<(Vec<String>, Value)> = Vec::new();

    for (key, value) in flat {
        let key = key.as_ref();
        let path: Vec<String> = if options.separator.is_empty() {
            vec![(options.transform_key)(key)]
        } else {
            key.split(options.separator.as_str())
                .map(|segment| (options.transform_key)(segment))
                .collect()
        };

        if path.iter().any(String::is_empty) {
            debug!("convert_to_nested: dropping key {:?} with empty segment", key);
            continue;
        }

        entries.push((path, (options.transform_value)(&value.into())));
    }

    // stable: equal lengths keep input order
    entries.sort_by_key(|(path, _)| path.len());

    let merge_options = MergeOptions::default();
    entries
        .into_iter()
        .fold(Value::object(), |acc, (path, value)| {
            merge(&acc, &nest(&path, value), &merge_options)
        })
}

fn nest(path: &[String], value: Value) -> Value {
    path.iter().rev().fold(value, |inner, segment| {
        let mut map = Object::new();
        map.insert(segment.clone(), inner);
        Value::Object(map)
    })
}

/// One step of a lookup path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

/// Walk `target` along `path`.
///
/// Arrays accept indices (or numeric keys); any other key on an array, or
/// missing structure at any step, yields `None`.
pub fn get_by_key<'a>(target: &'a Value, path: &[PathKey]) -> Option<&'a Value> {
    path.iter().try_fold(target, |current, step| match (current, step) {
        (Value::Object(map), PathKey::Key(key)) => map.get(key),
        (Value::Object(map), PathKey::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), PathKey::Index(index)) => items.get(*index),
        (Value::Array(items), PathKey::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    })
}

/// `get_by_key` with a dot-separated path (`"a.b.1.a"`)
pub fn get_by_dotted_key<'a>(target: &'a Value, path: &str) -> Option<&'a Value> {
    let keys: Vec<PathKey> = path.split('.').map(PathKey::from).collect();
    get_by_key(target, &keys)
}

/// Rebuild an object from transformed entries
pub fn map_record<F>(record: &Object, f: F) -> Object
where
    F: Fn(&str, &Value) -> (String, Value),
{
    record.iter().map(|(k, v)| f(k, v)).collect()
}

/// Rebuild an object where each entry expands to zero or more entries
pub fn flat_map_record<F, I>(record: &Object, f: F) -> Object
where
    F: Fn(&str, &Value) -> I,
    I: IntoIterator<Item = (String, Value)>,
{
    record.iter().flat_map(|(k, v)| f(k, v)).collect()
}

/// Keep the entries matching `predicate`
pub fn filter_record<F>(record: &Object, predicate: F) -> Object
where
    F: Fn(&str, &Value) -> bool,
{
    record
        .iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::string::camel_case;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_is_equal_primitives() {
        assert!(is_equal(&v(json!("aa")), &v(json!("aa"))));
        assert!(!is_equal(&v(json!("aa")), &v(json!("a"))));
        assert!(!is_equal(&v(json!(1)), &v(json!(-1))));
        assert!(!is_equal(&v(json!(true)), &v(json!(false))));
        assert!(!is_equal(&v(json!(1)), &v(json!("1"))));
    }

    #[test]
    fn test_is_equal_dates() {
        let d1 = Value::from(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        let d2 = Value::from(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
        let d3 = Value::from(Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());
        assert!(is_equal(&d1, &d2));
        assert!(!is_equal(&d1, &d3));
    }

    #[test]
    fn test_is_equal_arrays_and_objects() {
        assert!(is_equal(&v(json!(["a", 9])), &v(json!(["a", 9]))));
        assert!(!is_equal(&v(json!([9, "a"])), &v(json!([9]))));
        assert!(!is_equal(&v(json!({"a": 9, "b": "b"})), &v(json!({"a": 9}))));
        assert!(!is_equal(&v(json!({"a": 9, "b": "b"})), &v(json!({"a": 9, "b": "d"}))));
    }

    #[test]
    fn test_is_equal_nested() {
        assert!(is_equal(
            &v(json!({"a": [{"b": [9, 1]}, 3, {"a": false}]})),
            &v(json!({"a": [{"b": [9, 1]}, 3, {"a": false}]})),
        ));
        assert!(!is_equal(
            &v(json!({"a": [{"b": [9]}, 3, {"a": false}]})),
            &v(json!({"a": [{"b": [9, 1]}, 3, {"a": false}]})),
        ));
    }

    #[test]
    fn test_merge_objects() {
        let opts = MergeOptions::default();
        assert_eq!(merge(&v(json!({"a": 1})), &v(json!({"b": 2})), &opts), v(json!({"a": 1, "b": 2})));
        assert_eq!(
            merge(
                &v(json!({"a": 1, "c": {"a": 1}})),
                &v(json!({"a": {"b": 2}, "b": 2, "c": {"b": 1}})),
                &opts
            ),
            v(json!({"a": {"b": 2}, "b": 2, "c": {"a": 1, "b": 1}}))
        );
    }

    #[test]
    fn test_merge_array_policies() {
        let overwrite = MergeOptions::default();
        assert_eq!(
            merge(&v(json!({"a": [1, 2], "b": 3})), &v(json!({"a": [1]})), &overwrite),
            v(json!({"a": [1], "b": 3}))
        );

        let concat = MergeOptions::default().array_policy(ArrayPolicy::Merge);
        assert_eq!(merge(&v(json!([1, 2])), &v(json!([3, 4])), &concat), v(json!([1, 2, 3, 4])));

        let custom = MergeOptions::default()
            .merge_arrays_with(|a, b| b.iter().chain(a.iter()).cloned().collect());
        assert_eq!(merge(&v(json!([1, 2])), &v(json!([3, 4])), &custom), v(json!([3, 4, 1, 2])));
    }

    #[test]
    fn test_merge_skip_nulls() {
        let opts = MergeOptions::default().skip_nulls(true);
        assert_eq!(merge(&v(json!({"a": 1})), &v(json!({"a": null})), &opts), v(json!({"a": 1})));
        assert_eq!(merge(&v(json!({"a": 1})), &v(json!({"a": null})), &MergeOptions::default()), v(json!({"a": null})));
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let a = v(json!({"x": {"y": 1}, "k": [1]}));
        let b = v(json!({"x": {"z": 2}, "n": 3}));
        let a_before = a.clone();
        let b_before = b.clone();

        let merged = merge(&a, &b, &MergeOptions::default());

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
        for (key, value) in b.as_object().unwrap() {
            let got = merged.get(key).unwrap();
            if key == "x" {
                assert_eq!(got, &v(json!({"y": 1, "z": 2})));
            } else {
                assert_eq!(got, value);
            }
        }
    }

    #[test]
    fn test_clone_value() {
        let original = v(json!({"a": {"b": 1}, "c": [[1, 2], [3]]}));
        let mut copy = clone_value(&original, true);
        if let Value::Object(map) = &mut copy {
            map.insert("a".into(), v(json!(10)));
        }
        assert_eq!(original, v(json!({"a": {"b": 1}, "c": [[1, 2], [3]]})));
        assert_eq!(clone_value(&original, false), original);
        assert_eq!(clone_value(&v(json!(5)), true), v(json!(5)));
    }

    #[test]
    fn test_convert_to_nested() {
        let nested = convert_to_nested([("a.b", 1), ("a.a", 2)], &NestedOptions::default());
        assert_eq!(nested, v(json!({"a": {"a": 2, "b": 1}})));
    }

    #[test]
    fn test_convert_to_nested_separator() {
        let options = NestedOptions::default().separator("__");
        let nested = convert_to_nested([("a__b", 1), ("a__a", 2)], &options);
        assert_eq!(nested, v(json!({"a": {"a": 2, "b": 1}})));
    }

    #[test]
    fn test_convert_to_nested_key_transform() {
        let options = NestedOptions::default().separator("__").transform_key(camel_case);
        let nested = convert_to_nested(
            [("CONFIG__PRIVATE_KEY", "a"), ("CONFIG__PUBLIC_KEY", "b")],
            &options,
        );
        assert_eq!(nested, v(json!({"config": {"privateKey": "a", "publicKey": "b"}})));
    }

    #[test]
    fn test_convert_to_nested_parses_json() {
        let nested = convert_to_nested(
            [("a.b", "[1, 2, 3]"), ("a.a", "\"abc\""), ("a.c", "[\"1\", \"2\", \"3\"]")],
            &NestedOptions::default(),
        );
        assert_eq!(nested, v(json!({"a": {"a": "abc", "b": [1, 2, 3], "c": ["1", "2", "3"]}})));
    }

    #[test]
    fn test_convert_to_nested_longer_keys_last() {
        let nested = convert_to_nested(
            [("a.b", Value::from(2)), ("a", Value::from("{\"b\": 1}"))],
            &NestedOptions::default(),
        );
        assert_eq!(nested, v(json!({"a": {"b": 2}})));
    }

    #[test]
    fn test_convert_to_nested_drops_empty_keys() {
        let options = NestedOptions::default().separator("__").transform_key(camel_case);
        let nested = convert_to_nested([("NODE_ENV", "development"), ("_", "test")], &options);
        assert_eq!(nested, v(json!({"nodeEnv": "development"})));
    }

    #[test]
    fn test_get_by_key() {
        let data = v(json!({"a": {"b": [1, {"a": 10}]}}));
        assert_eq!(get_by_dotted_key(&data, "a.b.1.a"), Some(&v(json!(10))));

        let path: Vec<PathKey> = vec!["a".into(), "b".into(), 1usize.into(), "a".into()];
        assert_eq!(get_by_key(&data, &path), Some(&v(json!(10))));
    }

    #[test]
    fn test_get_by_key_missing() {
        let date = Value::from(Utc::now());
        assert_eq!(get_by_dotted_key(&date, "a.b.1.a"), None);
        assert_eq!(get_by_dotted_key(&v(json!([1, 2, 3])), "length"), None);
        assert_eq!(get_by_dotted_key(&v(json!({"a": 1})), "a.b"), None);
    }

    #[test]
    fn test_record_helpers() {
        let record = v(json!({"a": "b", "b": "c"}));
        let record = record.as_object().unwrap();

        let swapped = map_record(record, |k, v| (v.as_str().unwrap_or_default().to_string(), Value::from(k)));
        assert_eq!(Value::from(swapped), v(json!({"b": "a", "c": "b"})));

        let doubled = flat_map_record(record, |k, v| {
            if k == "a" {
                vec![(k.to_string(), v.clone()), (format!("{}2", k), v.clone())]
            } else {
                vec![]
            }
        });
        assert_eq!(Value::from(doubled), v(json!({"a": "b", "a2": "b"})));

        let filtered = filter_record(record, |k, v| k == "b" && v.as_str() == Some("c"));
        assert_eq!(Value::from(filtered), v(json!({"b": "c"})));
    }
}
