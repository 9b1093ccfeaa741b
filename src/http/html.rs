//! HTML entity and URL helpers

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref NAMED_ENTITY: Regex = Regex::new(r"&[a-z]+;").expect("Invalid regex pattern");
    static ref URL_ORIGIN: Regex =
        Regex::new(r"^(?://|[^/]+)*/").expect("Invalid regex pattern");
}

/// Escape `& < > " '`
pub fn encode_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for c in html.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Reverse `encode_html`; unknown entities are left untouched
pub fn decode_html(html: &str) -> String {
    NAMED_ENTITY
        .replace_all(html, |caps: &Captures| {
            match &caps[0] {
                "&amp;" => "&",
                "&lt;" => "<",
                "&gt;" => ">",
                "&quot;" => "\"",
                "&apos;" => "'",
                other => other,
            }
            .to_string()
        })
        .into_owned()
}

/// Drop scheme and host: `https://domain.com/index.html` -> `/index.html`
pub fn url_to_relative(url: &str) -> String {
    format!("/{}", URL_ORIGIN.replace(url, ""))
}
