//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{OtpError, RegistrationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A collaborator (mail relay, spreadsheet ledger) failed
    #[error("{service} error: {message}")]
    External { service: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl DomainError {
    /// Shorthand for a collaborator failure
    pub fn external(service: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::External {
            service: service.into(),
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
