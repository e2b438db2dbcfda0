//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits declared in
//! `fest_core`:
//! - **Mail**: Brevo transactional email API and a log-only mock
//! - **Sheets**: Google Sheets v4 ledger, an offline ledger, and a router
//!   that picks one backend per ledger

use fest_core::errors::DomainError;

/// Mail relay module - transactional email providers
pub mod mail;

/// Sheets module - spreadsheet-backed registration ledgers
pub mod sheets;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Mail relay rejected or failed a send
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Sheets API rejected a request or returned an unexpected body
    #[error("Sheets error: {0}")]
    Sheets(String),

    /// Service account authentication failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    fn service(&self) -> &'static str {
        match self {
            InfrastructureError::Mail(_) => "mail",
            InfrastructureError::Sheets(_) | InfrastructureError::Auth(_) => "ledger",
            InfrastructureError::Http(_) => "http",
            InfrastructureError::Config(_) => "config",
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::external(err.service(), err.to_string())
    }
}
