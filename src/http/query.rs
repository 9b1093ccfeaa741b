//! Query string parsing and generation

use std::collections::BTreeMap;

use crate::models::config::QueryOptions;
use crate::models::value::Value;
use crate::utils::encoding::{percent_decode, percent_encode};

fn decode_component(value: &str) -> String {
    percent_decode(&value.replace('+', " "))
}

fn encode_component(value: &str) -> String {
    percent_encode(value).replace("%20", "+")
}

/// Parse `?page=1&tag=a&tag=b` into `{page: ["1"], tag: ["a", "b"]}`.
///
/// A leading `?` is ignored. Entries without `=` or with an empty key are
/// dropped; `+` decodes to a space.
pub fn parse_query_string(query: &str, options: &QueryOptions) -> BTreeMap<String, Vec<String>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();

    if options.separator.is_empty() {
        return params;
    }

    for entry in query.split(options.separator.as_str()) {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        params
            .entry(decode_component(key))
            .or_default()
            .push(decode_component(value));
    }

    params
}

/// Serialize key/value pairs in the given order.
///
/// Arrays repeat the key per item, `Null` values (and `Null` array items)
/// are skipped, spaces encode as `+`.
///
/// ```
/// use ruster_kit::{generate_query_string, QueryOptions, Value};
///
/// let query = generate_query_string(
///     [("page", Value::from(vec![1])), ("limit", Value::from(20))],
///     &QueryOptions::default(),
/// );
/// assert_eq!(query, "page=1&limit=20");
/// ```
pub fn generate_query_string<I, K, V>(pairs: I, options: &QueryOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut entries = Vec::new();

    for (key, value) in pairs {
        let key = encode_component(key.as_ref());
        let value = value.into();
        let items = match &value {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };
        for item in items.into_iter().filter(|item| !item.is_null()) {
            entries.push(format!("{}={}", key, encode_component(&item.to_display_string())));
        }
    }

    entries.join(options.separator.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pairs: Vec<(&str, Vec<&str>)>) -> BTreeMap<String, Vec<String>> {
        pairs
            .into_iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_parse_with_question_mark() {
        assert_eq!(
            parse_query_string("?page=1&limit=20", &QueryOptions::default()),
            expected(vec![("page", vec!["1"]), ("limit", vec!["20"])])
        );
    }

    #[test]
    fn test_parse_without_question_mark() {
        assert_eq!(
            parse_query_string("page=1&limit=20", &QueryOptions::default()),
            expected(vec![("page", vec!["1"]), ("limit", vec!["20"])])
        );
    }

    #[test]
    fn test_parse_separator() {
        let options = QueryOptions::default().separator(";");
        assert_eq!(
            parse_query_string("page=1;limit=20", &options),
            expected(vec![("page", vec!["1"]), ("limit", vec!["20"])])
        );
    }

    #[test]
    fn test_parse_repeated_and_invalid() {
        assert_eq!(
            parse_query_string("tag=a&tag=b+c&flag&=x&q=%C4%97", &QueryOptions::default()),
            expected(vec![("tag", vec!["a", "b c"]), ("q", vec!["ė"])])
        );
    }

    #[test]
    fn test_generate() {
        let query = generate_query_string(
            [("page", Value::from(vec![1])), ("limit", Value::from(20))],
            &QueryOptions::default(),
        );
        assert_eq!(query, "page=1&limit=20");
    }

    #[test]
    fn test_generate_separator() {
        let query = generate_query_string(
            [("page", Value::from(vec![1])), ("limit", Value::from(20))],
            &QueryOptions::default().separator(";"),
        );
        assert_eq!(query, "page=1;limit=20");
    }

    #[test]
    fn test_generate_skips_nulls_and_encodes() {
        let query = generate_query_string(
            [
                ("q", Value::from("hello world")),
                ("skip", Value::Null),
                ("tag", Value::from(vec![Value::from("a&b"), Value::Null, Value::from(true)])),
            ],
            &QueryOptions::default(),
        );
        assert_eq!(query, "q=hello+world&tag=a%26b&tag=true");
    }
}
