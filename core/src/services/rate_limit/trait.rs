//! Rate limiting trait

use async_trait::async_trait;

/// Outcome of consuming one point for an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request admitted; `remaining` points are left in the current window
    Allow { remaining: u32 },
    /// Budget exhausted; the window resets in `retry_after_seconds`
    Reject { retry_after_seconds: u64 },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitDecision::Allow { .. })
    }
}

/// Rate limiting service trait for code issuance requests
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Consume one point for `identity` (the requester address)
    async fn consume(&self, identity: &str) -> RateLimitDecision;
}
