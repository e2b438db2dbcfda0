//! Rate limiting for code issuance
//!
//! A fixed-window counter keyed by requester address. The trait is async so
//! a shared store can replace the in-process limiter without touching callers.

mod memory;
mod r#trait;


pub use memory::{InMemoryRateLimiter, RateLimitBucket};
pub use r#trait::{RateLimitDecision, RateLimiterTrait};
