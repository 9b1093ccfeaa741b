//! HTTP Module - Protocol Reference Data & Header Helpers
//!
//! Status codes, HTTP errors, cookies, query strings, MIME types and HTML
//! escaping. Pure string work: nothing here opens a connection.

pub mod codes;
pub mod cookies;
pub mod errors;
pub mod html;
pub mod mime;
pub mod query;

pub use codes::*;
pub use cookies::*;
pub use errors::*;
pub use html::*;
pub use mime::*;
pub use query::*;
