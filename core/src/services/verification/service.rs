//! Main verification service implementation

use chrono::Duration;
use std::sync::Arc;

use fest_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use fest_shared::utils::validation::is_six_digit_code;

use crate::errors::{DomainResult, OtpError};
use crate::services::rate_limit::{RateLimitDecision, RateLimiterTrait};

use super::code_store::{CodeStore, VerifyOutcome};
use super::config::OtpServiceConfig;
use super::traits::NotifierTrait;
use super::types::SendCodeResult;

/// Issues one-time codes by email and verifies them
pub struct OtpService<N: NotifierTrait, R: RateLimiterTrait> {
    /// Mail relay used to deliver codes
    notifier: Arc<N>,
    /// Per-requester issuance limiter
    rate_limiter: Arc<R>,
    /// Live codes
    code_store: Arc<CodeStore>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<N: NotifierTrait, R: RateLimiterTrait> OtpService<N, R> {
    /// Create a new verification service with its own code store
    pub fn new(notifier: Arc<N>, rate_limiter: Arc<R>, config: OtpServiceConfig) -> Self {
        let code_store = Arc::new(CodeStore::new(config.ttl));
        Self::with_store(notifier, rate_limiter, code_store, config)
    }

    /// Create a verification service over an existing code store
    pub fn with_store(
        notifier: Arc<N>,
        rate_limiter: Arc<R>,
        code_store: Arc<CodeStore>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            notifier,
            rate_limiter,
            code_store,
            config,
        }
    }

    /// Code store shared with the expiry sweeper
    pub fn code_store(&self) -> Arc<CodeStore> {
        Arc::clone(&self.code_store)
    }

    /// Issue a code for `email` and mail it
    ///
    /// 1. Validates the address shape
    /// 2. Consumes one rate-limit point for `requester`
    /// 3. Stores a fresh code, replacing any previous one
    /// 4. Sends the code; a relay failure is returned, never swallowed
    pub async fn request_code(&self, email: &str, requester: &str) -> DomainResult<SendCodeResult> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(OtpError::InvalidAddress.into());
        }

        if let RateLimitDecision::Reject { retry_after_seconds } =
            self.rate_limiter.consume(requester).await
        {
            return Err(OtpError::RateLimited { retry_after_seconds }.into());
        }

        let masked = mask_email(email);
        let record = self.code_store.issue(&normalize_email(email));
        tracing::info!(
            email = %masked,
            event = "otp_issued",
            expires_at = %record.expires_at,
            "Issued one-time code"
        );

        let subject = format!("Your OTP for {} Registration", self.config.event_name);
        let html = format!(
            "<p>Your OTP for {} registration is: <strong>{}</strong>. It is valid for {}.</p>",
            self.config.event_name,
            record.code,
            describe_validity(self.config.ttl)
        );

        let receipt = self
            .notifier
            .send(email, &subject, &html)
            .await
            .map_err(|reason| {
                tracing::error!(
                    email = %masked,
                    error = %reason,
                    event = "otp_dispatch_failed",
                    "Failed to send one-time code"
                );
                OtpError::DispatchFailed { reason }
            })?;

        tracing::info!(
            email = %masked,
            message_id = %receipt.message_id,
            event = "otp_sent",
            "One-time code sent"
        );

        Ok(SendCodeResult {
            message_id: receipt.message_id,
            expires_at: record.expires_at,
        })
    }

    /// Verify `candidate` for `email`; a success consumes the code
    ///
    /// Unknown, expired and mismatched codes all collapse into
    /// `OtpError::InvalidOrExpired`.
    pub async fn verify_code(&self, email: &str, candidate: &str) -> DomainResult<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(OtpError::InvalidInput {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_six_digit_code(candidate) {
            return Err(OtpError::InvalidInput {
                field: "otp".to_string(),
            }
            .into());
        }

        let masked = mask_email(email);
        match self.code_store.verify(&normalize_email(email), candidate) {
            VerifyOutcome::Success => {
                tracing::info!(email = %masked, event = "otp_verified", "One-time code verified");
                Ok(())
            }
            outcome => {
                tracing::warn!(
                    email = %masked,
                    outcome = ?outcome,
                    event = "otp_verification_failed",
                    "One-time code rejected"
                );
                Err(OtpError::InvalidOrExpired.into())
            }
        }
    }
}

/// Human-readable validity, e.g. `5 minutes` or `90 seconds`
fn describe_validity(ttl: Duration) -> String {
    let seconds = ttl.num_seconds();
    match (seconds % 60, seconds / 60) {
        (0, 1) => String::from("1 minute"),
        (0, minutes) if minutes > 1 => format!("{} minutes", minutes),
        _ => format!("{} seconds", seconds),
    }
}
