//! Configuration for the verification service

use chrono::Duration;
use fest_shared::config::OtpConfig;

use crate::domain::entities::otp_record::DEFAULT_TTL_SECONDS;
use crate::services::clamped_seconds;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Lifetime of an issued code
    pub ttl: Duration,
    /// Event name used in the email subject and body
    pub event_name: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::seconds(DEFAULT_TTL_SECONDS as i64),
            event_name: String::from("VYOMANG"),
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            ttl: clamped_seconds(config.ttl_seconds),
            event_name: config.event_name.clone(),
        }
    }
}
