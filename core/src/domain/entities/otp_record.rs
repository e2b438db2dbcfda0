//! One-time code entity for email verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a code (5 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 5 * 60;

/// A live one-time code bound to a normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized (trimmed, lower-cased) email address
    pub key: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record with a freshly generated code
    pub fn new(key: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            key: key.into(),
            code: Self::generate_code(),
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Generates a 6-digit code drawn uniformly from `100000..=999999`
    pub fn generate_code() -> String {
        rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
    }

    /// A code is still accepted at exactly `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Seconds left before expiry, zero once expired
    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
