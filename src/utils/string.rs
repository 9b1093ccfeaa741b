//! String Helpers
//!
//! Case conversion, word extraction and truncation. Patterns are compiled
//! once into statics.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::utils::constants::DEFAULT_TRUNCATE_ENDING;

pub use crate::utils::constants::{
    ASCII_LETTERS, ASCII_LOWERCASE, ASCII_UPPERCASE, DIGITS, HEXDIGITS, OCTDIGITS, PUNCTUATION,
};

lazy_static! {
    /// Separators between words (space through `.`, plus common symbols)
    static ref WORD_SEPARATORS: Regex =
        Regex::new(r##"[ -./\\()"',;<>~!@#$%^&*|+=\[\]{}`?:]+"##).expect("Invalid regex pattern");

    static ref LEADING_DELIMITERS: Regex =
        Regex::new(r"^[_.\- ]+").expect("Invalid regex pattern");

    static ref DELIMITED_CHAR: Regex =
        Regex::new(r"[_.\- ]+([0-9A-Za-z_]|$)").expect("Invalid regex pattern");

    static ref DIGITS_THEN_CHAR: Regex =
        Regex::new(r"[0-9]+([0-9A-Za-z_]|$)").expect("Invalid regex pattern");
}

fn is_letter_char(c: char) -> bool {
    !c.to_lowercase().eq(c.to_uppercase())
}

/// True when the text has distinct upper and lower case forms
pub fn is_letter(value: &str) -> bool {
    value.to_lowercase() != value.to_uppercase()
}

/// Cut `value` to `length` characters, ending with `...`
pub fn truncate(value: &str, length: usize) -> String {
    truncate_with(value, length, DEFAULT_TRUNCATE_ENDING)
}

/// Cut `value` to `length` characters including `ending`
pub fn truncate_with(value: &str, length: usize, ending: &str) -> String {
    if value.chars().count() <= length {
        return value.to_string();
    }
    let keep = length.saturating_sub(ending.chars().count());
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(ending);
    out
}

/// Split on punctuation and whitespace; `_` stays inside words
pub fn extract_words(value: &str) -> Vec<String> {
    WORD_SEPARATORS
        .split(value)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// `--foo bar` -> `fooBar`, `foo1bar` -> `foo1Bar`
pub fn camel_case(value: &str) -> String {
    let trimmed = LEADING_DELIMITERS.replace(value, "").to_lowercase();
    let joined = DELIMITED_CHAR.replace_all(&trimmed, |caps: &Captures| caps[1].to_uppercase());
    DIGITS_THEN_CHAR
        .replace_all(&joined, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// `camel_case` with the first character uppercased
pub fn pascal_case(value: &str) -> String {
    let camel = camel_case(value);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Uppercase every character not preceded by a letter, lowercase the rest
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev: Option<char> = None;
    for c in value.chars() {
        if prev.is_some_and(is_letter_char) {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev = Some(c);
    }
    out
}
