//! Random helpers on the thread-local (non-cryptographic) generator

use rand::seq::SliceRandom;
use rand::Rng;

use crate::utils::constants::{ASCII_LETTERS, DIGITS, PUNCTUATION};

/// Random integer in `[min, max]` (bounds may be given in either order)
pub fn random_int(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// One random item, `None` for an empty slice
pub fn random_choice<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}

/// `length` random picks with replacement; empty when `items` is empty
pub fn random_choices<T: Clone>(items: &[T], length: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| items.choose(&mut rng).cloned())
        .collect()
}

/// Random string drawn from `chars`, defaulting to letters, digits and
/// punctuation
pub fn random_string(length: usize, chars: Option<&str>) -> String {
    let default_chars = format!("{}{}{}", ASCII_LETTERS, DIGITS, PUNCTUATION);
    let pool: Vec<char> = chars.unwrap_or(&default_chars).chars().collect();
    random_choices(&pool, length).into_iter().collect()
}

/// Shuffled copy of `items`
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(&mut rand::thread_rng());
    copy
}
