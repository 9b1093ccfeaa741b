//! Integration tests for Ruster Kit

use ruster_kit::{
    base64_decode, base64_encode, chunk, compose, convert_to_nested, curry, deduplicate,
    difference, error_response, generate_cookie, generate_query_string, generate_range,
    generate_range_step, get_by_dotted_key, get_extension, get_mime_type, group_by, http::status,
    intersection, is_equal, merge, parse_cookies, parse_query_string, pipe, sort_by, try_catch,
    try_catch_or, union, Arg, ArrayPolicy, CookieOptions, Curry, ErrorCode, HttpError, KitError,
    MergeOptions, NestedOptions, QueryOptions, Value,
};
use serde_json::json;

fn value(v: serde_json::Value) -> Value {
    Value::from(v)
}

#[test]
fn test_sort_by_boolean_key() {
    let sorted = sort_by(&[1, 2, 3, 4, 5], |v: &i32| *v <= 3);
    assert_eq!(sorted, vec![4, 5, 1, 2, 3]);
}

#[test]
fn test_sort_by_multi_key_is_stable() {
    let people = vec![("ann", 30), ("bob", 25), ("cid", 30), ("dan", 25)];
    let sorted = sort_by(&people, |(_, age): &(&str, i32)| vec![*age]);
    assert_eq!(sorted, vec![("bob", 25), ("dan", 25), ("ann", 30), ("cid", 30)]);
}

#[test]
fn test_ranges() {
    assert_eq!(generate_range(4), vec![0, 1, 2, 3]);
    assert_eq!(generate_range_step(10, 0, -3), vec![10, 7, 4, 1]);
    assert!(generate_range_step(0, 10, -1).is_empty());
    assert!(generate_range_step(0, 10, 0).is_empty());
}

#[test]
fn test_group_by_floor() {
    let groups = group_by(&[6.1, 4.2, 6.3], |v: &f64| v.floor());
    assert_eq!(groups, vec![(4.0, vec![4.2]), (6.0, vec![6.1, 6.3])]);
}

#[test]
fn test_group_by_object_keys_ignore_key_order() {
    let rows = vec![
        value(json!({"k": {"a": 1, "b": 2}, "n": 1})),
        value(json!({"k": {"b": 2, "a": 1}, "n": 2})),
    ];
    let groups = group_by(&rows, |row: &Value| row.get("k").cloned().unwrap_or(Value::Null));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn test_dedup_and_sets() {
    let items = vec![1, 2, 1, 3, 2];
    let once = deduplicate(&items);
    assert_eq!(once, vec![1, 2, 3]);
    assert_eq!(deduplicate(&once), once);

    assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
    assert_eq!(intersection(&[vec![1, 2, 3, 2], vec![2, 3], vec![3, 2, 9]]), vec![2, 3]);
    assert_eq!(union(&[vec![1, 2], vec![2, 3], vec![3, 4]]), vec![1, 2, 3, 4]);
    assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert!(chunk(&[1, 2, 3], 0).is_empty());
}

#[test]
fn test_pipe_and_compose() {
    let out = pipe!(3, |x: i32| x + 1, |x: i32| x * 10, |x: i32| x.to_string());
    assert_eq!(out, "40");

    let f = compose!(|x: i32| x.to_string(), |x: i32| x * 10, |x: i32| x + 1);
    assert_eq!(f(3), "40");
}

#[test]
fn test_curry_total_arity() {
    let sum3 = curry(3, |args: Vec<i32>| args.iter().sum::<i32>());

    let direct = sum3.call_values([1, 2, 3]).into_done();
    let stepwise = sum3
        .call_values([1])
        .into_partial()
        .and_then(|p| p.call_values([2]).into_partial())
        .and_then(|p| p.call_values([3]).into_done());
    assert_eq!(direct, Some(6));
    assert_eq!(stepwise, direct);

    let with_hole = sum3.call([Arg::Hole, Arg::Val(2)]);
    match with_hole {
        Curry::Partial(p) => {
            assert_eq!(p.collected(), 1);
            assert_eq!(p.call_values([1, 3]).into_done(), Some(6));
        }
        Curry::Done(_) => panic!("should still be partial"),
    }
}

#[test]
fn test_try_catch_captures_errors_and_panics() {
    let err = try_catch(|| -> Result<i32, KitError> { Err("boom".into()) }).unwrap_err();
    assert_eq!(err.message, "boom");

    let panicked = try_catch(|| -> Result<i32, KitError> { panic!("kaboom") }).unwrap_err();
    assert_eq!(panicked.code, ErrorCode::CallbackPanicked);

    assert_eq!(try_catch_or(|| -> Result<i32, KitError> { Err("x".into()) }, 7), 7);
    assert_eq!(try_catch_or(|| -> Result<i32, KitError> { Ok(1) }, 7), 1);
}

#[test]
fn test_merge_does_not_mutate_and_keeps_source_keys() {
    let target = value(json!({"a": {"x": 1}, "list": [1, 2]}));
    let source = value(json!({"a": {"y": 2}, "list": [3], "b": null}));
    let before = target.clone();

    let merged = merge(&target, &source, &MergeOptions::default());
    assert_eq!(target, before);
    assert_eq!(merged, value(json!({"a": {"x": 1, "y": 2}, "list": [3], "b": null})));

    let concat = merge(
        &target,
        &source,
        &MergeOptions::default().skip_nulls(true).array_policy(ArrayPolicy::Merge),
    );
    assert_eq!(concat.get("list"), Some(&value(json!([1, 2, 3]))));
}

#[test]
fn test_convert_to_nested_longer_paths_win() {
    let nested = convert_to_nested(
        [("a.b", Value::from(2)), ("a", Value::from("{\"b\":1}"))],
        &NestedOptions::default(),
    );
    assert_eq!(nested, value(json!({"a": {"b": 2}})));
    assert_eq!(get_by_dotted_key(&nested, "a.b"), Some(&Value::from(2)));
    assert!(is_equal(&nested, &value(json!({"a": {"b": 2}}))));
}

#[test]
fn test_base64_round_trip_unicode() {
    let text = "rtėęrfgt58įė9įėš+ė*-は个";
    assert_eq!(base64_decode(&base64_encode(text)).unwrap(), text);
    assert!(base64_decode("not base64!").is_err());
}

#[test]
fn test_cookie_round_trip() {
    let cookie = generate_cookie("=", "=", &CookieOptions::default());
    assert_eq!(cookie, "%3D=%3D");
    assert_eq!(parse_cookies(&cookie).get("="), Some(&"=".to_string()));
}

#[test]
fn test_query_round_trip() {
    let query = generate_query_string(
        [("q", Value::from("a b")), ("tag", Value::from(vec!["x", "y"]))],
        &QueryOptions::default(),
    );
    assert_eq!(query, "q=a+b&tag=x&tag=y");

    let parsed = parse_query_string(&format!("?{}", query), &QueryOptions::default());
    assert_eq!(parsed["q"], vec!["a b"]);
    assert_eq!(parsed["tag"], vec!["x", "y"]);
}

#[test]
fn test_http_error_to_response() {
    let err = HttpError::from_status(status::NOT_FOUND).unwrap();
    assert_eq!(error_response(&err), (404, value(json!({"error": "Not Found"}))));
    assert_eq!(
        HttpError::from_status(951).unwrap_err().code,
        ErrorCode::HttpInvalidStatus
    );
}

#[test]
fn test_mime_lookup() {
    assert_eq!(get_mime_type("report.pdf"), Some("application/pdf"));
    assert_eq!(get_extension("application/json; charset=utf-8"), Some("json"));
}
