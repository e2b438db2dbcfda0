//! Type definitions module
//!
//! - `response` - API response envelopes and health checks

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus, VerifyResponse};
