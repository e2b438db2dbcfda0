//! One-time code configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Lifetime and housekeeping settings for emailed one-time codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a code stays valid after issuance
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,

    /// Seconds between expiry sweeps of the in-memory stores
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,

    /// Event name used in the email subject and body
    #[serde(default = "default_event_name")]
    pub event_name: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            sweep_interval_seconds: default_sweep_interval(),
            event_name: default_event_name(),
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_TTL_SECONDS`, `OTP_SWEEP_INTERVAL_SECONDS` and `EVENT_NAME`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: env_or("OTP_TTL_SECONDS", defaults.ttl_seconds),
            sweep_interval_seconds: env_or(
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            ),
            event_name: env_opt("EVENT_NAME").unwrap_or(defaults.event_name),
        }
    }
}

fn default_ttl() -> u64 {
    5 * 60
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_event_name() -> String {
    String::from("VYOMANG")
}
