//! Cookie header helpers

use chrono::{Duration, Utc};
use std::collections::BTreeMap;

use crate::models::config::CookieOptions;
use crate::utils::constants::MS_PER_DAY;
use crate::utils::encoding::{percent_decode, percent_encode};

/// Expiry timestamp format (`Thu, 01 Jan 1970 00:00:00 GMT`)
const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Build a `Set-Cookie` value: `name=value` followed by the attributes
/// set in `options`, all joined with `;`.
///
/// ```
/// use ruster_kit::{generate_cookie, CookieOptions};
///
/// assert_eq!(generate_cookie("=", "=", &CookieOptions::default()), "%3D=%3D");
/// ```
pub fn generate_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut parts = vec![format!("{}={}", percent_encode(name), percent_encode(value))];

    if let Some(days) = options.expires.filter(|d| *d != 0.0) {
        let expires_at = Utc::now() + Duration::milliseconds((days * MS_PER_DAY) as i64);
        parts.push(format!("expires={}", expires_at.format(COOKIE_DATE_FORMAT)));
    }
    if let Some(path) = &options.path {
        parts.push(format!("path={}", path));
    }
    if let Some(domain) = &options.domain {
        parts.push(format!("domain={}", domain));
    }
    if options.secure {
        parts.push("secure".to_string());
    }
    if let Some(same_site) = options.same_site {
        parts.push(format!("samesite={}", same_site.as_str()));
    }

    parts.join(";")
}

/// Parse a `Cookie` header (`a=1; b=2`) into name/value pairs.
///
/// Entries without `=` are skipped, surrounding double quotes are removed
/// and both sides are percent-decoded.
pub fn parse_cookies(header: &str) -> BTreeMap<String, String> {
    header
        .split("; ")
        .filter_map(|entry| entry.split_once('='))
        .map(|(name, value)| {
            let unquoted = value
                .strip_prefix('"')
                .map(|v| v.strip_suffix('"').unwrap_or(v))
                .unwrap_or(value);
            (percent_decode(name), percent_decode(unquoted))
        })
        .collect()
}
