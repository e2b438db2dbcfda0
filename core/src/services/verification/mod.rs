//! Verification service module for email-based one-time codes
//!
//! This module provides the complete code workflow:
//! - In-memory code store with expiry
//! - Code generation and dispatch through a notifier
//! - Rate limiting of issuance per requester address
//! - Single-use verification with constant-time comparison

mod code_store;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use code_store::{CodeStore, VerifyOutcome};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{DeliveryReceipt, NotifierTrait};
pub use types::SendCodeResult;
