//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `environment` - Environment detection and logging configuration
//! - `ledger` - Spreadsheet ledgers backing student and guest registrations
//! - `mail` - Transactional email relay
//! - `otp` - One-time code lifetime and sweep interval
//! - `rate_limit` - Rate limiting for code issuance
//! - `server` - HTTP server and CORS configuration

pub mod environment;
pub mod ledger;
pub mod mail;
pub mod otp;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use ledger::LedgerConfig;
pub use mail::{MailConfig, MailProvider};
pub use otp::OtpConfig;
pub use rate_limit::RateLimitConfig;
pub use server::{CorsConfig, ServerConfig};

/// Upper bound for every configured lifetime, window and interval (one year)
pub const MAX_DURATION_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// One-time code configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Mail relay configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Registration ledger configuration
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::for_environment(env),
            logging: LoggingConfig::for_environment(env),
            otp: OtpConfig::default(),
            rate_limit: RateLimitConfig::default(),
            mail: MailConfig::default(),
            ledger: LedgerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every sub-configuration falls back to its defaults for variables that
    /// are unset or fail to parse.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
            otp: OtpConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            mail: MailConfig::from_env(),
            ledger: LedgerConfig::from_env(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }

        if self.otp.ttl_seconds == 0 {
            return Err("OTP lifetime must be greater than 0".to_string());
        }

        if self.otp.sweep_interval_seconds == 0 {
            return Err("OTP sweep interval must be greater than 0".to_string());
        }

        if self.rate_limit.otp_points == 0 || self.rate_limit.otp_window_seconds == 0 {
            return Err("OTP rate limit points and window must be greater than 0".to_string());
        }

        let durations = [
            self.otp.ttl_seconds,
            self.otp.sweep_interval_seconds,
            self.rate_limit.otp_window_seconds,
        ];
        if durations.iter().any(|secs| *secs > MAX_DURATION_SECONDS) {
            return Err(format!(
                "OTP lifetime, sweep interval and rate limit window must not exceed {} seconds",
                MAX_DURATION_SECONDS
            ));
        }

        // Outside production a missing key degrades to the log-only provider
        if self.environment.is_production()
            && self.mail.provider == MailProvider::Brevo
            && self.mail.api_key.is_none()
        {
            return Err("BREVO_API_KEY is required when MAIL_PROVIDER=brevo".to_string());
        }

        Ok(())
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read an optional, non-empty environment variable.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
