//! File size and path helpers

use crate::models::value::format_number;
use crate::utils::constants::{byte_unit_index, BYTES_BASE, BYTE_UNITS, DEFAULT_BYTE_DECIMALS};

/// Human readable size with the default precision (`"15.53 MB"`)
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with(bytes, DEFAULT_BYTE_DECIMALS)
}

/// Human readable size rounded to `decimals`, trailing zeros dropped.
///
/// Zero, negative and NaN sizes render as `"0 Bytes"`.
pub fn format_bytes_with(bytes: f64, decimals: usize) -> String {
    if bytes.is_nan() || bytes <= 0.0 {
        return format!("0 {}", BYTE_UNITS[0]);
    }

    let exponent = (bytes.ln() / BYTES_BASE.ln()).floor().max(0.0) as usize;
    let index = exponent.min(BYTE_UNITS.len() - 1);
    let scaled = bytes / BYTES_BASE.powi(index as i32);

    // round through the fixed-point text form, then print the shortest number
    let rounded: f64 = format!("{:.*}", decimals, scaled)
        .parse()
        .unwrap_or(scaled);

    format!("{} {}", format_number(rounded), BYTE_UNITS[index])
}

/// Inverse of `format_bytes`: `"1.6 KB"` -> `1638.4`.
///
/// A missing unit means bytes; unparsable input yields `0`.
pub fn parse_size(value: &str) -> f64 {
    let mut parts = value.split_whitespace();
    let Some(amount) = parts.next().and_then(|n| n.parse::<f64>().ok()) else {
        return 0.0;
    };
    let index = match parts.next() {
        Some(unit) => match byte_unit_index(unit) {
            Some(index) => index,
            None => return 0.0,
        },
        None => 0,
    };
    amount * BYTES_BASE.powi(index as i32)
}

/// Split a path into `(stem, extension)`; the extension keeps its dot.
///
/// Dot files without a second dot have no extension.
pub fn get_file_parts(pathname: &str) -> (String, String) {
    let file_name = pathname.rsplit('/').next().unwrap_or_default();
    let min_dots = if file_name.starts_with('.') { 2 } else { 1 };
    let dot_count = file_name.matches('.').count();

    match file_name.rsplit_once('.') {
        Some((_, extension)) if dot_count >= min_dots && !extension.is_empty() => {
            let stem = &pathname[..pathname.len() - extension.len() - 1];
            (stem.to_string(), format!(".{}", extension))
        }
        _ => (pathname.to_string(), String::new()),
    }
}
