//! In-process fixed-window rate limiter

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fest_shared::config::RateLimitConfig;

use crate::services::clamped_seconds;

use super::r#trait::{RateLimitDecision, RateLimiterTrait};

/// Per-identity counter for the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitBucket {
    pub count: u32,
    pub window_started_at: DateTime<Utc>,
}

/// Fixed-window limiter: `points` requests per `window` per identity
///
/// Buckets are created lazily and reset once `now - window_started_at >= window`.
pub struct InMemoryRateLimiter {
    points: u32,
    window: Duration,
    buckets: Mutex<HashMap<String, RateLimitBucket>>,
}

impl InMemoryRateLimiter {
    pub fn new(points: u32, window: Duration) -> Self {
        Self {
            points,
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(
            config.effective_points(),
            clamped_seconds(config.otp_window_seconds),
        )
    }

    /// Consume one point for `identity` at `now`
    pub fn consume_at(&self, identity: &str, now: DateTime<Utc>) -> RateLimitDecision {
        let mut buckets = self.lock();
        let bucket = buckets
            .entry(identity.to_string())
            .or_insert(RateLimitBucket {
                count: 0,
                window_started_at: now,
            });

        if now - bucket.window_started_at >= self.window {
            *bucket = RateLimitBucket {
                count: 0,
                window_started_at: now,
            };
        }

        if bucket.count >= self.points {
            let resets_at = bucket.window_started_at + self.window;
            let millis = (resets_at - now).num_milliseconds().max(0) as u64;
            return RateLimitDecision::Reject {
                retry_after_seconds: ((millis + 999) / 1000).max(1),
            };
        }

        bucket.count += 1;
        RateLimitDecision::Allow {
            remaining: self.points - bucket.count,
        }
    }

    /// Drop buckets whose window has elapsed; returns how many were dropped
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut buckets = self.lock();
        let before = buckets.len();
        buckets.retain(|_, bucket| now - bucket.window_started_at < self.window);
        before - buckets.len()
    }

    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    /// Number of tracked identities
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, RateLimitBucket>> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryRateLimiter {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn consume(&self, identity: &str) -> RateLimitDecision {
        let decision = self.consume_at(identity, Utc::now());
        if let RateLimitDecision::Reject { retry_after_seconds } = decision {
            tracing::warn!(
                identity = identity,
                retry_after_seconds = retry_after_seconds,
                event = "rate_limit_exceeded",
                "Code issuance rate limit exceeded"
            );
        }
        decision
    }
}
