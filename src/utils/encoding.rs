//! Encoding helpers: structural hash, base64, percent codec, UUIDs.

use rand::Rng;
use serde::Serialize;
use uuid::Builder;

use crate::models::errors::{KitError, KitResult};
use crate::utils::constants::{BASE64_ALPHABET, BASE64_PAD, HASH_MULTIPLIER};

/// Deterministic 32-bit hash of the compact JSON form of `value`.
///
/// Java-style rolling hash (`h = h * 31 + unit`) over UTF-16 code units.
/// Not cryptographic. Use it with [`Value`](crate::Value) or `serde_json`
/// values for a canonical result, since both serialize objects with sorted
/// keys.
pub fn hash_code<T: Serialize + ?Sized>(value: &T) -> i32 {
    let json = serde_json::to_string(value).unwrap_or_default();
    hash_str(&json)
}

/// Rolling hash of a string's UTF-16 code units
pub fn hash_str(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(unit as i32)
    })
}

// ============================================
// BASE64
// ============================================

/// Base64-encode the UTF-8 bytes of `value`
pub fn base64_encode(value: &str) -> String {
    base64_encode_bytes(value.as_bytes())
}

/// Base64-encode raw bytes (standard alphabet, padded)
pub fn base64_encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for group in bytes.chunks(3) {
        let b0 = group[0] as u32;
        let b1 = group.get(1).copied().unwrap_or(0) as u32;
        let b2 = group.get(2).copied().unwrap_or(0) as u32;
        let triple = (b0 << 16) | (b1 << 8) | b2;

        let sextet = |shift: u32| BASE64_ALPHABET[((triple >> shift) & 0x3f) as usize] as char;

        out.push(sextet(18));
        out.push(sextet(12));
        out.push(if group.len() > 1 { sextet(6) } else { BASE64_PAD as char });
        out.push(if group.len() > 2 { sextet(0) } else { BASE64_PAD as char });
    }

    out
}

/// Decode base64 into a UTF-8 string
pub fn base64_decode(value: &str) -> KitResult<String> {
    let bytes = base64_decode_bytes(value)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode base64 into raw bytes.
///
/// ASCII whitespace is ignored and trailing padding is optional.
pub fn base64_decode_bytes(value: &str) -> KitResult<Vec<u8>> {
    let cleaned: Vec<u8> = value
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let trimmed = match cleaned.iter().position(|&b| b == BASE64_PAD) {
        Some(pad_at) => {
            if cleaned[pad_at..].iter().any(|&b| b != BASE64_PAD) || cleaned.len() - pad_at > 2 {
                return Err(KitError::invalid_base64("Padding in the middle of input"));
            }
            &cleaned[..pad_at]
        }
        None => &cleaned[..],
    };

    if trimmed.len() % 4 == 1 {
        return Err(KitError::invalid_base64(format!(
            "Invalid base64 length: {}",
            trimmed.len()
        )));
    }

    let mut out = Vec::with_capacity(trimmed.len() * 3 / 4);
    for group in trimmed.chunks(4) {
        let mut acc: u32 = 0;
        for (i, &c) in group.iter().enumerate() {
            let sextet = sextet_of(c).ok_or_else(|| {
                KitError::invalid_base64(format!("Invalid base64 character: {:?}", c as char))
            })?;
            acc |= (sextet as u32) << (18 - 6 * i);
        }
        out.push((acc >> 16) as u8);
        if group.len() > 2 {
            out.push((acc >> 8) as u8);
        }
        if group.len() > 3 {
            out.push(acc as u8);
        }
    }

    Ok(out)
}

fn sextet_of(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

// ============================================
// PERCENT ENCODING
// ============================================

/// Characters `encodeURIComponent` leaves alone
fn is_component_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode a URI component (UTF-8 bytes, uppercase hex)
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for &b in value.as_bytes() {
        if is_component_safe(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push_str(&hex::encode_upper([b]));
        }
    }
    out
}

/// Decode `%XX` escapes; malformed escapes are kept as-is
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(decoded) = hex::decode(&bytes[i + 1..i + 3]) {
                out.extend(decoded);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

// ============================================
// UUID
// ============================================

/// Random version-4 style identifier (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`).
///
/// Uses the thread-local non-cryptographic generator.
pub fn generate_uuid() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}
