//! Constants Module - Single Source of Truth
//!
//! Defaults, alphabets and unit tables used across the crate.
//! Other modules import from here instead of hardcoding values.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Library name
pub const APP_NAME: &str = "RusterKit";

/// Library version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// OPTION DEFAULTS
// ============================================

/// Default separator for `convert_to_nested` keys
pub const DEFAULT_NESTED_SEPARATOR: &str = ".";

/// Default separator between query string entries
pub const DEFAULT_QUERY_SEPARATOR: &str = "&";

/// Default `truncate` ending
pub const DEFAULT_TRUNCATE_ENDING: &str = "...";

/// Default number of decimals for `format_bytes`
pub const DEFAULT_BYTE_DECIMALS: usize = 2;

/// Milliseconds per day (cookie expiry is given in days)
pub const MS_PER_DAY: f64 = 864e5;

// ============================================
// CHARACTER CLASSES
// ============================================

/// The lowercase letters `abcdefghijklmnopqrstuvwxyz`
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The uppercase letters `ABCDEFGHIJKLMNOPQRSTUVWXYZ`
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `ASCII_LOWERCASE` followed by `ASCII_UPPERCASE`
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The string `0123456789`
pub const DIGITS: &str = "0123456789";

/// The string `0123456789abcdefABCDEF`
pub const HEXDIGITS: &str = "0123456789abcdefABCDEF";

/// The string `01234567`
pub const OCTDIGITS: &str = "01234567";

/// Printable ASCII punctuation, backslash excluded
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[]^_`{|}~";

// ============================================
// ENCODING
// ============================================

/// Standard base64 alphabet
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 padding character
pub const BASE64_PAD: u8 = b'=';

/// Multiplier of the rolling string hash
pub const HASH_MULTIPLIER: i32 = 31;

// ============================================
// BYTE UNITS
// ============================================

/// Base of the binary byte units
pub const BYTES_BASE: f64 = 1024.0;

/// Byte unit labels, smallest first
pub const BYTE_UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Position of a unit label in `BYTE_UNITS`
pub fn byte_unit_index(unit: &str) -> Option<usize> {
    BYTE_UNITS.iter().position(|u| u.eq_ignore_ascii_case(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_concat() {
        assert_eq!(ASCII_LETTERS, format!("{}{}", ASCII_LOWERCASE, ASCII_UPPERCASE));
    }

    #[test]
    fn test_byte_unit_index() {
        assert_eq!(byte_unit_index("Bytes"), Some(0));
        assert_eq!(byte_unit_index("mb"), Some(2));
        assert_eq!(byte_unit_index("XB"), None);
    }
}
