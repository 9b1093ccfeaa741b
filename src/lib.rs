//! Ruster Kit Library
//!
//! Lodash-style utility toolbox:
//! - Stable key-based sorting, grouping, dedup and set operations
//! - Function composition, placeholder currying, panic-safe `try_catch`
//! - Debounce / throttle on the tokio timer
//! - Deep equality, merge, clone and dotted-key nesting over a dynamic `Value`
//! - Encodings, memoization, string / random / file-size helpers
//! - HTTP reference data: status codes, errors, cookies, query strings, MIME

pub mod core;
pub mod http;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::curry::{curry, curry2, curry3, Arg, Curried, Curry};
pub use crate::core::fp::{
    assert_error, assert_not_error, compose_all, pipe_all, try_catch, try_catch_async,
    try_catch_async_or, try_catch_or,
};
pub use crate::core::group::{
    chunk, deduplicate, deduplicate_by, difference, difference_by, flatten, group_by, index_by,
    index_by_many, intersection, intersection_by, union, union_by,
};
pub use crate::core::object::{
    clone_value, convert_to_nested, filter_record, flat_map_record, get_by_dotted_key, get_by_key,
    is_equal, map_record, merge, parse_json_or_raw, PathKey,
};
pub use crate::core::sort::{
    compare_values, generate_range, generate_range_step, sort_by, sort_by_cb, sort_by_identity,
};
pub use crate::core::timing::{debounce, delay, throttle, Debounced, Throttled};
pub use http::codes::{is_known_status, reason_phrase, status, status_code};
pub use http::cookies::{generate_cookie, parse_cookies};
pub use http::errors::{error_response, HttpError};
pub use http::html::{decode_html, encode_html, url_to_relative};
pub use http::mime::{get_extension, get_mime_type};
pub use http::query::{generate_query_string, parse_query_string};
pub use logging::{init_logging, DummyLogger, Logger, TracingLogger};
pub use models::config::{
    ArrayPolicy, CookieOptions, MergeOptions, NestedOptions, QueryOptions, SameSite,
    ThrottleOptions,
};
pub use models::errors::{ErrorCode, KitError, KitResult};
pub use models::value::{Object, Value, ValueKind};
pub use utils::cache::{CacheStats, Memoized, MemoizedAsync};
pub use utils::encoding::{
    base64_decode, base64_encode, generate_uuid, hash_code, percent_decode, percent_encode,
};
pub use utils::files::{format_bytes, format_bytes_with, get_file_parts, parse_size};
pub use utils::guards::{
    ensure_array, is_array, is_bool, is_empty, is_null, is_number, is_plain_object, is_string,
};
pub use utils::random::{random_choice, random_choices, random_int, random_string, shuffle};
pub use utils::string::{camel_case, extract_words, is_letter, pascal_case, title_case, truncate, truncate_with};
