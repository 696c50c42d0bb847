//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! Every fallible operation in this crate returns [`Result<T>`], an alias for
//! `Result<T, AppError>`. Stores never rethrow past their own boundary: they
//! record a display message in their `error` field and hand the same
//! [`AppError`] back to the caller, so failure is always visible in the type.
//!
//! ## Error Categories
//!
//! - **Request**: the backend answered with a non-2xx status
//! - **Network**: the request never produced a response (DNS, refused, timeout)
//! - **Decode**: the backend answered 2xx but the body did not match the expected schema
//! - **InvalidRequest**: the request could not be built (e.g. a malformed MIME type)
//! - **Storage**: reading or writing persisted session state failed
//! - **Config**: environment configuration is missing or invalid
//!
//! ## Display messages
//!
//! Only a message sent by the backend is considered user facing. Stores call
//! [`AppError::message_or`] with their localized fallback:
//!
//! ```rust
//! use dashboard::core::error::AppError;
//!
//! let err = AppError::Request { status: Some(500), message: None };
//! assert_eq!(err.message_or("Không thể cập nhật tài liệu"), "Không thể cập nhật tài liệu");
//!
//! let err = AppError::Request { status: Some(403), message: Some("Không có quyền".into()) };
//! assert_eq!(err.message_or("fallback"), "Không có quyền");
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Non-2xx response. `message` is only set when the response body carried one.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Request {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Transport-level failure before any response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body that does not decode into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request that could not be built, rejected before any I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persisted session storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// HTTP status of a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Request { status, .. } => *status,
            _ => None,
        }
    }

    /// Message provided by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Request {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Server message, or `fallback` when the error carries none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
