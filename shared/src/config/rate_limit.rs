//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Code issuance requests allowed per requester address per window
    #[serde(default = "default_otp_points")]
    pub otp_points: u32,

    /// Length of the fixed issuance window in seconds
    #[serde(default = "default_otp_window")]
    pub otp_window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            otp_points: default_otp_points(),
            otp_window_seconds: default_otp_window(),
        }
    }
}

impl RateLimitConfig {
    /// Load from `OTP_RATE_LIMIT_*` variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("OTP_RATE_LIMIT_ENABLED", defaults.enabled),
            otp_points: env_or("OTP_RATE_LIMIT_POINTS", defaults.otp_points),
            otp_window_seconds: env_or(
                "OTP_RATE_LIMIT_WINDOW_SECONDS",
                defaults.otp_window_seconds,
            ),
        }
    }

    /// Effective point budget; disabled limiting means an unbounded budget
    pub fn effective_points(&self) -> u32 {
        if self.enabled {
            self.otp_points
        } else {
            u32::MAX
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_otp_points() -> u32 {
    5
}

fn default_otp_window() -> u64 {
    60
}
