//! HTTP Status Codes
//!
//! Static code/reason table with lookups in both directions. Named codes
//! live in [`status`] (`status::NOT_FOUND == 404`).

use lazy_static::lazy_static;
use std::collections::HashMap;

macro_rules! status_table {
    ($( $name:ident = $code:literal => $reason:literal, )*) => {
        /// Named status codes
        pub mod status {
            $( pub const $name: u16 = $code; )*
        }

        /// Every known `(code, reason phrase)` pair, ascending by code
        pub static STATUS_TABLE: &[(u16, &str)] = &[ $( ($code, $reason), )* ];
    };
}

status_table! {
    CONTINUE = 100 => "Continue",
    SWITCHING_PROTOCOLS = 101 => "Switching Protocols",
    PROCESSING = 102 => "Processing",
    EARLY_HINTS = 103 => "Early Hints",
    OK = 200 => "OK",
    CREATED = 201 => "Created",
    ACCEPTED = 202 => "Accepted",
    NON_AUTHORITATIVE_INFORMATION = 203 => "Non-Authoritative Information",
    NO_CONTENT = 204 => "No Content",
    RESET_CONTENT = 205 => "Reset Content",
    PARTIAL_CONTENT = 206 => "Partial Content",
    MULTI_STATUS = 207 => "Multi-Status",
    ALREADY_REPORTED = 208 => "Already Reported",
    IM_USED = 226 => "IM Used",
    MULTIPLE_CHOICES = 300 => "Multiple Choices",
    MOVED_PERMANENTLY = 301 => "Moved Permanently",
    FOUND = 302 => "Found",
    SEE_OTHER = 303 => "See Other",
    NOT_MODIFIED = 304 => "Not Modified",
    USE_PROXY = 305 => "Use Proxy",
    TEMPORARY_REDIRECT = 307 => "Temporary Redirect",
    PERMANENT_REDIRECT = 308 => "Permanent Redirect",
    BAD_REQUEST = 400 => "Bad Request",
    UNAUTHORIZED = 401 => "Unauthorized",
    PAYMENT_REQUIRED = 402 => "Payment Required",
    FORBIDDEN = 403 => "Forbidden",
    NOT_FOUND = 404 => "Not Found",
    METHOD_NOT_ALLOWED = 405 => "Method Not Allowed",
    NOT_ACCEPTABLE = 406 => "Not Acceptable",
    PROXY_AUTHENTICATION_REQUIRED = 407 => "Proxy Authentication Required",
    REQUEST_TIMEOUT = 408 => "Request Timeout",
    CONFLICT = 409 => "Conflict",
    GONE = 410 => "Gone",
    LENGTH_REQUIRED = 411 => "Length Required",
    PRECONDITION_FAILED = 412 => "Precondition Failed",
    PAYLOAD_TOO_LARGE = 413 => "Payload Too Large",
    URI_TOO_LONG = 414 => "URI Too Long",
    UNSUPPORTED_MEDIA_TYPE = 415 => "Unsupported Media Type",
    RANGE_NOT_SATISFIABLE = 416 => "Range Not Satisfiable",
    EXPECTATION_FAILED = 417 => "Expectation Failed",
    IM_A_TEAPOT = 418 => "I'm a Teapot",
    MISDIRECTED_REQUEST = 421 => "Misdirected Request",
    UNPROCESSABLE_ENTITY = 422 => "Unprocessable Entity",
    LOCKED = 423 => "Locked",
    FAILED_DEPENDENCY = 424 => "Failed Dependency",
    TOO_EARLY = 425 => "Too Early",
    UPGRADE_REQUIRED = 426 => "Upgrade Required",
    PRECONDITION_REQUIRED = 428 => "Precondition Required",
    TOO_MANY_REQUESTS = 429 => "Too Many Requests",
    REQUEST_HEADER_FIELDS_TOO_LARGE = 431 => "Request Header Fields Too Large",
    UNAVAILABLE_FOR_LEGAL_REASONS = 451 => "Unavailable For Legal Reasons",
    INTERNAL_SERVER_ERROR = 500 => "Internal Server Error",
    NOT_IMPLEMENTED = 501 => "Not Implemented",
    BAD_GATEWAY = 502 => "Bad Gateway",
    SERVICE_UNAVAILABLE = 503 => "Service Unavailable",
    GATEWAY_TIMEOUT = 504 => "Gateway Timeout",
    HTTP_VERSION_NOT_SUPPORTED = 505 => "HTTP Version Not Supported",
    VARIANT_ALSO_NEGOTIATES = 506 => "Variant Also Negotiates",
    INSUFFICIENT_STORAGE = 507 => "Insufficient Storage",
    LOOP_DETECTED = 508 => "Loop Detected",
    BANDWIDTH_LIMIT_EXCEEDED = 509 => "Bandwidth Limit Exceeded",
    NOT_EXTENDED = 510 => "Not Extended",
    NETWORK_AUTHENTICATION_REQUIRED = 511 => "Network Authentication Required",
}

lazy_static! {
    static ref CODE_TO_REASON: HashMap<u16, &'static str> =
        STATUS_TABLE.iter().copied().collect();

    static ref REASON_TO_CODE: HashMap<&'static str, u16> =
        STATUS_TABLE.iter().map(|&(code, reason)| (reason, code)).collect();
}

/// Reason phrase for a status code
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    CODE_TO_REASON.get(&code).copied()
}

/// Status code for an exact reason phrase
pub fn status_code(reason: &str) -> Option<u16> {
    REASON_TO_CODE.get(reason).copied()
}

pub fn is_known_status(code: u16) -> bool {
    CODE_TO_REASON.contains_key(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(status_code("Not Found"), Some(404));
        assert_eq!(status::NOT_FOUND, 404);
        assert_eq!(reason_phrase(status::IM_A_TEAPOT), Some("I'm a Teapot"));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(reason_phrase(951), None);
        assert_eq!(status_code("Nope"), None);
        assert!(!is_known_status(299));
    }

    #[test]
    fn test_table_is_consistent() {
        assert_eq!(STATUS_TABLE.len(), 63);
        assert!(STATUS_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
        for &(code, reason) in STATUS_TABLE {
            assert_eq!(status_code(reason), Some(code));
        }
    }
}
