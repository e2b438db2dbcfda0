//! Shared utilities and common types for the fest registration server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error envelope and error codes
//! - Utility functions (email validation, masking, etc.)
//! - API response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, LedgerConfig, LoggingConfig, MailConfig, OtpConfig,
    RateLimitConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, VerifyResponse};
pub use utils::{email, validation};
