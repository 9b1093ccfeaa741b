//! HTTP Error Type
//!
//! An error carrying a validated status code, a private message and the
//! message safe to show to clients.

use serde::Serialize;
use std::fmt;

use crate::http::codes::{reason_phrase, status_code};
use crate::models::errors::{ErrorCode, KitError, KitResult};
use crate::models::value::{Object, Value};

/// Error with an HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpError {
    pub status: u16,
    /// Full message, may contain internal details
    pub message: String,
    /// Whether `message` may be shown to clients
    pub expose: bool,
    /// `message` when exposed, the reason phrase otherwise
    pub public_message: String,
}

impl HttpError {
    /// Build an error for a known status code.
    ///
    /// `message` defaults to the reason phrase and `expose` to
    /// `status < 500`. Unknown codes fail with `HttpInvalidStatus`.
    pub fn new(status: u16, message: Option<&str>, expose: Option<bool>) -> KitResult<Self> {
        let reason = reason_phrase(status).ok_or_else(|| KitError::invalid_status(status))?;
        let message = message.unwrap_or(reason).to_string();
        let expose = expose.unwrap_or(status < 500);
        let public_message = if expose {
            message.clone()
        } else {
            reason.to_string()
        };

        Ok(Self {
            status,
            message,
            expose,
            public_message,
        })
    }

    /// Shorthand for `new(status, None, None)`
    pub fn from_status(status: u16) -> KitResult<Self> {
        Self::new(status, None, None)
    }

    /// Build from a reason phrase such as `"Not Found"`
    pub fn from_reason(reason: &str, message: Option<&str>, expose: Option<bool>) -> KitResult<Self> {
        let status = status_code(reason).ok_or_else(|| {
            KitError::new(
                ErrorCode::HttpInvalidStatus,
                format!("Incorrect status message: {}", reason),
            )
        })?;
        Self::new(status, message, expose)
    }

    pub fn reason(&self) -> &'static str {
        reason_phrase(self.status).unwrap_or_default()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl std::error::Error for HttpError {}

/// Status and JSON body for reporting any error to a client.
///
/// `HttpError`s keep their status and report their public message; every
/// other error maps to `500` with its display form.
pub fn error_response(err: &(dyn std::error::Error + 'static)) -> (u16, Value) {
    let (status, message) = match err.downcast_ref::<HttpError>() {
        Some(http) => (http.status, http.public_message.clone()),
        None => (500, err.to_string()),
    };
    let mut body = Object::new();
    body.insert("error".to_string(), Value::from(message));
    (status, Value::Object(body))
}
