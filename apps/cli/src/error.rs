//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tabsplit                               │
//! │                                                                         │
//! │  > cost 9 12.50                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Shell parse                                                     │  │
//! │  │  Bad syntax? ──── ParseError ─────────────────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Command function                                                │  │
//! │  │  Unknown person? ─ CoreError::PersonNotFound ──► ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  error [NOT_FOUND]: Person not found: 9                                 │
//! │  (the shell keeps running)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` serializes with a machine-readable `code` and a human-readable
//! `message`, so `--json` output carries errors in the same shape.

use serde::Serialize;
use tabsplit_core::CoreError;

use crate::shell::ParseError;

/// Error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Person not found: 9"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Person does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The line could not be understood as a command
    InvalidCommand,

    /// A command needs an open editor and none is open
    NoEditorOpen,

    /// Terminal I/O or serialization failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// The error for commands that target "the person being edited".
    pub fn no_editor_open() -> Self {
        ApiError::new(
            ErrorCode::NoEditorOpen,
            "No bill is open; give a person id or open one with `edit <id>`",
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PersonNotFound(id) => {
                ApiError::new(ErrorCode::NotFound, format!("Person not found: {}", id))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal(format!("Terminal I/O failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        ApiError::internal("Could not serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = serde_json::to_value(self.code)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("{:?}", self.code));
        write!(f, "[{}] {}", code, self.message)
    }
}

impl std::error::Error for ApiError {}
