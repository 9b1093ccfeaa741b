//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so callers can match on the
//! category without parsing messages.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - HTTP_xxx: HTTP helper errors
//! - ENC_xxx: Encoding errors
//! - JSON_xxx: Serialization errors
//! - CALL_xxx: Errors captured from wrapped callbacks

use std::fmt;

/// Library-wide error type
#[derive(Debug)]
pub struct KitError {
    /// Unique error code for matching/logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl KitError {
    /// Create a new KitError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create KitError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for KitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ============================================
    // HTTP Errors
    // ============================================
    /// Status code missing from the status table
    HttpInvalidStatus,

    // ============================================
    // Encoding Errors
    // ============================================
    /// Input is not valid base64
    EncodingInvalidBase64,
    /// Decoded bytes are not valid UTF-8
    EncodingInvalidUtf8,

    // ============================================
    // Serialization Errors
    // ============================================
    /// JSON parse/serialize failure
    JsonError,

    // ============================================
    // Wrapped Callback Errors
    // ============================================
    /// Callback returned an error
    CallbackFailed,
    /// Callback panicked
    CallbackPanicked,

    // ============================================
    // Generic Errors
    // ============================================
    /// IO error
    Io,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HttpInvalidStatus => "HTTP_INVALID_STATUS",

            Self::EncodingInvalidBase64 => "ENC_INVALID_BASE64",
            Self::EncodingInvalidUtf8 => "ENC_INVALID_UTF8",

            Self::JsonError => "JSON_ERROR",

            Self::CallbackFailed => "CALL_FAILED",
            Self::CallbackPanicked => "CALL_PANICKED",

            Self::Io => "IO_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Check if the error was captured from a user callback
    pub fn is_captured(&self) -> bool {
        matches!(self, Self::CallbackFailed | Self::CallbackPanicked)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl KitError {
    /// Unknown HTTP status code
    pub fn invalid_status(status: u16) -> Self {
        Self::new(
            ErrorCode::HttpInvalidStatus,
            format!("Incorrect status code: {}", status),
        )
    }

    /// Invalid base64 input
    pub fn invalid_base64(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EncodingInvalidBase64, msg)
    }

    /// Callback failed with the given message
    pub fn callback_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CallbackFailed, msg)
    }

    /// Callback panicked; payload coerced to its string form
    pub fn panicked(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CallbackPanicked, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Library Result type
pub type KitResult<T> = Result<T, KitError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for KitError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::CallbackFailed, err.to_string())
    }
}

impl From<std::io::Error> for KitError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Io, "IO error", err)
    }
}

impl From<serde_json::Error> for KitError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        Self::with_source(ErrorCode::JsonError, message, err)
    }
}

impl From<std::string::FromUtf8Error> for KitError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::with_source(ErrorCode::EncodingInvalidUtf8, "Decoded bytes are not UTF-8", err)
    }
}

impl From<String> for KitError {
    fn from(msg: String) -> Self {
        Self::callback_failed(msg)
    }
}

impl From<&str> for KitError {
    fn from(msg: &str) -> Self {
        Self::callback_failed(msg)
    }
}
