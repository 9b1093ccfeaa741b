//! Comparator / Sort Engine
//!
//! Multi-key comparison over [`Value`] keys and a stable `sort_by` built on
//! top of it. Keys may be numbers, booleans, dates, or (nested) arrays of
//! those; strings and objects compare by their string forms, and values of
//! different kinds order by kind.
//!
//! ```
//! use ruster_kit::sort_by;
//!
//! // Partition by a boolean key, ties keep their input order
//! assert_eq!(sort_by(&[1, 2, 3, 4, 5], |k| *k <= 3), vec![4, 5, 1, 2, 3]);
//! ```

use std::cmp::Ordering;

use crate::models::value::{Value, ValueKind};

/// Compare two key values.
///
/// 1. number vs number: numeric order, `NaN` after every other number
/// 2. bool vs bool: `false < true`
/// 3. date vs date: epoch milliseconds
/// 4. array vs array: pairwise, first non-equal pair wins; when every pair
///    ties, equal lengths are equal and the shorter array orders last
/// 5. same kind otherwise (strings, objects, nulls): string forms,
///    lexicographically
/// 6. different kinds: bool < number < date < string < array < object < null
///
/// The result is a total order, so it is safe to hand to `slice::sort_by`.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(*x, *y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Date(x), Value::Date(y)) => x.timestamp_millis().cmp(&y.timestamp_millis()),
        (Value::Array(xs), Value::Array(ys)) => xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| compare_values(x, y))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| ys.len().cmp(&xs.len())),
        _ if a.kind() == b.kind() => a.to_display_string().cmp(&b.to_display_string()),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn compare_numbers(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0 and 0 tie
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value.kind() {
        ValueKind::Bool => 0,
        ValueKind::Number => 1,
        ValueKind::Date => 2,
        ValueKind::String => 3,
        ValueKind::Array => 4,
        ValueKind::Object => 5,
        ValueKind::Null => 6,
    }
}

/// Build a comparator from a key function, usable with `slice::sort_by`.
///
/// ```
/// use ruster_kit::sort_by_cb;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// words.sort_by(sort_by_cb(|w: &&str| w.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by_cb<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Into<Value>,
    F: Fn(&T) -> K,
{
    move |a, b| compare_values(&key(a).into(), &key(b).into())
}

/// Stable sort returning a new vector; `items` is left untouched.
///
/// Keys are computed once per item. The original index is the final
/// tiebreaker, so equal keys keep their input order.
pub fn sort_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Into<Value>,
    F: Fn(&T) -> K,
{
    let mut decorated: Vec<(Value, usize)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (key(item).into(), index))
        .collect();

    decorated.sort_by(|(key_a, index_a), (key_b, index_b)| {
        compare_values(key_a, key_b).then(index_a.cmp(index_b))
    });

    decorated
        .into_iter()
        .map(|(_, index)| items[index].clone())
        .collect()
}

/// `sort_by` with the identity key
pub fn sort_by_identity<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Into<Value>,
{
    sort_by(items, |item| item.clone())
}

/// Integers from `0` (inclusive) to `stop` (exclusive)
pub fn generate_range(stop: i64) -> Vec<i64> {
    generate_range_step(0, stop, 1)
}

/// Integers from `start` (inclusive) to `stop` (exclusive) by `step`.
///
/// Empty when `step` is zero or points away from `stop`.
pub fn generate_range_step(start: i64, stop: i64, step: i64) -> Vec<i64> {
    if step == 0 || (step > 0 && start >= stop) || (step < 0 && start <= stop) {
        return Vec::new();
    }

    let span = (stop - start).unsigned_abs();
    let stride = step.unsigned_abs();
    let len = span.div_ceil(stride) as usize;

    let mut result = Vec::with_capacity(len);
    let mut current = start;
    for _ in 0..len {
        result.push(current);
        current += step;
    }
    result
}
