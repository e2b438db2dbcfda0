//! Shared error envelope

use serde::{Deserialize, Serialize};

/// Error body returned by every `success`-style endpoint
///
/// Serializes as `{"success": false, "message": "...", "error": "CODE"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable error message
    pub message: String,

    /// Error code for client identification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response with a code
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(error.into()),
        }
    }

    /// Create an error response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    pub const EMAIL_INVALID: &str = "EMAIL_INVALID";
    pub const OTP_INVALID: &str = "OTP_INVALID";
    pub const MAIL_ERROR: &str = "MAIL_ERROR";
    pub const LEDGER_ERROR: &str = "LEDGER_ERROR";
    pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";
    pub const RECORD_NOT_FOUND: &str = "RECORD_NOT_FOUND";
}
