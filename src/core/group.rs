//! Grouping / Dedup / Set Engine
//!
//! Key-function based grouping, indexing, deduplication and set-style
//! operations. None of these mutate their input.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::warn;

use crate::core::sort::compare_values;
use crate::models::value::Value;
use crate::utils::encoding::hash_code;

/// Accumulator for one group: original key plus matching items
struct Bucket<K, T> {
    key: K,
    key_value: Value,
    first_seen: usize,
    items: Vec<T>,
}

/// Group items by the structural hash of `key(item)`.
///
/// Groups come back ordered by ascending key (same rules as `sort_by`),
/// with first appearance breaking ties. Items keep their input order.
///
/// ```
/// use ruster_kit::group_by;
///
/// let groups = group_by(&[6.1, 4.2, 6.3], |v: &f64| v.floor());
/// assert_eq!(groups, vec![(4.0, vec![4.2]), (6.0, vec![6.1, 6.3])]);
/// ```
pub fn group_by<T, K, F>(items: &[T], key: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: Clone + Into<Value>,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<i32, Vec<usize>> = HashMap::new();
    let mut buckets: Vec<Bucket<K, T>> = Vec::new();

    for item in items {
        let key_raw = key(item);
        let key_value: Value = key_raw.clone().into();
        let hash = hash_code(&key_value);

        // Same hash is only the same group when the keys are structurally equal
        let slot = positions
            .get(&hash)
            .and_then(|candidates| {
                candidates
                    .iter()
                    .copied()
                    .find(|&i| buckets[i].key_value == key_value)
            });

        match slot {
            Some(i) => buckets[i].items.push(item.clone()),
            None => {
                let index = buckets.len();
                positions.entry(hash).or_default().push(index);
                buckets.push(Bucket {
                    key: key_raw,
                    key_value,
                    first_seen: index,
                    items: vec![item.clone()],
                });
            }
        }
    }

    buckets.sort_by(|a, b| {
        compare_values(&a.key_value, &b.key_value).then(a.first_seen.cmp(&b.first_seen))
    });

    buckets.into_iter().map(|b| (b.key, b.items)).collect()
}

/// Index items by a primitive key
pub fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    index_by_many(items, |item| [key(item)])
}

/// Index items under every key returned by `keys`
pub fn index_by_many<T, K, I, F>(items: &[T], keys: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
    F: Fn(&T) -> I,
{
    let mut index: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        for k in keys(item) {
            index.entry(k).or_default().push(item.clone());
        }
    }
    index
}

/// Remove later duplicates, keeping first-occurrence order
pub fn deduplicate<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    deduplicate_by(items, |item| item.clone())
}

/// Remove items whose key was already seen, keeping first-occurrence order
pub fn deduplicate_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key(item)))
        .cloned()
        .collect()
}

/// Split into consecutive chunks of at most `size` items.
///
/// `size == 0` yields no chunks.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        warn!("chunk called with size 0, returning no chunks");
        return Vec::new();
    }
    items.chunks(size).map(|c| c.to_vec()).collect()
}

/// Items whose key does not appear among `values`
pub fn difference_by<T, K, F>(items: &[T], values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let excluded: Vec<K> = values.iter().map(&key).collect();
    items
        .iter()
        .filter(|item| {
            let k = key(item);
            !excluded.iter().any(|e| *e == k)
        })
        .cloned()
        .collect()
}

/// `difference_by` with the identity key
pub fn difference<T>(items: &[T], values: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    difference_by(items, values, |item| item.clone())
}

/// Items of the first array (first occurrence only) whose key is present
/// in every other array
pub fn intersection_by<T, K, F>(arrays: &[Vec<T>], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let Some((first, rest)) = arrays.split_first() else {
        return Vec::new();
    };
    let rest_keys: Vec<Vec<K>> = rest
        .iter()
        .map(|array| array.iter().map(&key).collect())
        .collect();

    let mut kept_keys: Vec<K> = Vec::new();
    let mut result = Vec::new();
    for item in first {
        let k = key(item);
        if kept_keys.iter().any(|seen| *seen == k) {
            continue;
        }
        if rest_keys.iter().all(|keys| keys.iter().any(|other| *other == k)) {
            result.push(item.clone());
            kept_keys.push(k);
        }
    }
    result
}

/// `intersection_by` with the identity key
pub fn intersection<T>(arrays: &[Vec<T>]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    intersection_by(arrays, |item| item.clone())
}

/// All items across `arrays`, first occurrence of each key kept
pub fn union_by<T, K, F>(arrays: &[Vec<T>], key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut kept_keys: Vec<K> = Vec::new();
    let mut result = Vec::new();
    for item in arrays.iter().flatten() {
        let k = key(item);
        if !kept_keys.iter().any(|seen| *seen == k) {
            kept_keys.push(k);
            result.push(item.clone());
        }
    }
    result
}

/// `union_by` with the identity key
pub fn union<T>(arrays: &[Vec<T>]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    union_by(arrays, |item| item.clone())
}

/// Flatten nested arrays up to `depth` levels; non-array items pass through
pub fn flatten(items: &[Value], depth: usize) -> Vec<Value> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => result.extend(flatten(inner, depth - 1)),
            other => result.push(other.clone()),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_by_number() {
        let groups = group_by(&[6.1, 4.2, 6.3], |v: &f64| v.floor());
        assert_eq!(groups, vec![(4.0, vec![4.2]), (6.0, vec![6.1, 6.3])]);
    }

    #[test]
    fn test_group_by_multiple_conditions() {
        let groups = group_by(&["one", "two", "three"], |v| (v.len(), v.contains('a')));
        assert_eq!(
            groups,
            vec![((3, false), vec!["one", "two"]), ((5, false), vec!["three"])]
        );
    }

    #[test]
    fn test_group_by_structural_key() {
        let items = vec![json!({"k": {"a": 1, "b": 2}}), json!({"k": {"b": 2, "a": 1}})];
        let groups = group_by(&items, |v| Value::from(v["k"].clone()));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_group_by_nan_and_mixed_keys() {
        let items: Vec<i32> = (0..40).collect();
        let groups = group_by(&items, |v| match v % 4 {
            0 => Value::from(f64::NAN),
            1 => Value::from(v % 3),
            2 => Value::from((v % 5).to_string()),
            _ => Value::Null,
        });

        let keys: Vec<Value> = groups.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                Value::from(0),
                Value::from(1),
                Value::from(2),
                Value::from(f64::NAN),
                Value::from("0"),
                Value::from("1"),
                Value::from("2"),
                Value::from("3"),
                Value::from("4"),
                Value::Null,
            ]
        );
        assert_eq!(groups[3].1.len(), 10);
        assert_eq!(groups.iter().map(|(_, g)| g.len()).sum::<usize>(), 40);
    }

    #[test]
    fn test_index_by() {
        let index = index_by(&["one", "two", "three"], |v| v.len());
        assert_eq!(index[&3], vec!["one", "two"]);
        assert_eq!(index[&5], vec!["three"]);
    }

    #[test]
    fn test_index_by_many_fans_out() {
        let index = index_by_many(&["ab", "b"], |v| v.chars().collect::<Vec<_>>());
        assert_eq!(index[&'a'], vec!["ab"]);
        assert_eq!(index[&'b'], vec!["ab", "b"]);
    }

    #[test]
    fn test_deduplicate_mixed_values() {
        let obj = Value::from(json!({}));
        let items = vec![
            obj.clone(),
            Value::from(1),
            Value::from("5"),
            Value::from(true),
            Value::from(5),
            Value::from(1),
            obj.clone(),
            Value::from(false),
            Value::from(true),
        ];
        assert_eq!(
            deduplicate(&items),
            vec![
                obj,
                Value::from(1),
                Value::from("5"),
                Value::from(true),
                Value::from(5),
                Value::from(false),
            ]
        );
    }

    #[test]
    fn test_deduplicate_idempotent() {
        let items = vec![3, 1, 3, 2, 1, 2];
        let once = deduplicate(&items);
        assert_eq!(once, vec![3, 1, 2]);
        assert_eq!(deduplicate(&once), once);
    }

    #[test]
    fn test_deduplicate_by() {
        let items = vec![("a", 1), ("b", 1), ("c", 5), ("d", 1)];
        assert_eq!(deduplicate_by(&items, |v| v.1), vec![("a", 1), ("c", 5)]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(chunk(&[1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(chunk(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
        assert!(chunk::<i32>(&[], 2).is_empty());
        assert!(chunk(&[1, 2], 0).is_empty());
    }

    #[test]
    fn test_set_operations() {
        assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
        assert_eq!(intersection(&[vec![1, 2, 2, 3], vec![2, 3, 4], vec![3, 2]]), vec![2, 3]);
        assert_eq!(union(&[vec![1, 2], vec![2, 3], vec![3, 4]]), vec![1, 2, 3, 4]);
        assert!(intersection::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_set_operations_by_key() {
        let a = vec![("x", 1), ("y", 2)];
        let b = vec![("z", 1)];
        assert_eq!(difference_by(&a, &b, |v| v.1), vec![("y", 2)]);
        assert_eq!(intersection_by(&[a.clone(), b.clone()], |v| v.1), vec![("x", 1)]);
        assert_eq!(union_by(&[a, b], |v| v.1), vec![("x", 1), ("y", 2)]);
    }

    #[test]
    fn test_flatten() {
        let nested = Value::from(json!([1, 2, [3, 4, [5, 6]]]));
        let items = nested.as_array().unwrap();
        assert_eq!(Value::from(flatten(items, 1)), Value::from(json!([1, 2, 3, 4, [5, 6]])));
        assert_eq!(Value::from(flatten(items, 2)), Value::from(json!([1, 2, 3, 4, 5, 6])));
    }
}
