//! Error types for the one-time code and registration flows
//!
//! The display strings double as the client-facing messages; the
//! presentation layer decides the status code.

use thiserror::Error;

use crate::domain::entities::registrant::Ledger;

/// One-time code issuance and verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid email address")]
    InvalidAddress,

    #[error("Invalid email or OTP")]
    InvalidInput { field: String },

    #[error("Rate limit exceeded. Try again later.")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Invalid or expired OTP")]
    InvalidOrExpired,

    #[error("Failed to send OTP. Please check email configuration.")]
    DispatchFailed { reason: String },
}

/// Registration and payment recording errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("All fields are required ({field} is missing)")]
    MissingField { field: String },

    #[error("Email already registered")]
    DuplicateEmail { ledger: Ledger },

    #[error("Failed to update payment status")]
    RecordNotFound,
}
