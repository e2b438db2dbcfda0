//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for `success`-style endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a successful response with a message
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Envelope for the code verification endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the code was accepted
    pub verified: bool,

    /// Reason for rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyResponse {
    pub fn verified() -> Self {
        Self {
            verified: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            message: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,

    /// Running environment
    pub environment: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            version: version.into(),
            environment: environment.into(),
        }
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}
