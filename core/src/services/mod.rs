//! Business services containing domain logic and use cases.

pub mod rate_limit;
pub mod registration;
pub mod sweeper;
pub mod verification;

use chrono::Duration;
use fest_shared::config::MAX_DURATION_SECONDS;

/// Seconds from configuration as a `Duration`, clamped to `MAX_DURATION_SECONDS`
pub(crate) fn clamped_seconds(secs: u64) -> Duration {
    // The clamp keeps the value well inside i64 seconds
    Duration::seconds(secs.min(MAX_DURATION_SECONDS) as i64)
}

// Re-export commonly used types
pub use rate_limit::{InMemoryRateLimiter, RateLimitBucket, RateLimitDecision, RateLimiterTrait};
pub use registration::{DuplicateCheckPolicy, LedgerMatch, PaymentUpdate, RegistrationService};
pub use sweeper::{ExpirySweeper, SweepResult, SweeperHandle};
pub use verification::{
    CodeStore, DeliveryReceipt, NotifierTrait, OtpService, OtpServiceConfig, SendCodeResult,
    VerifyOutcome,
};
