//! Mock Mail Service Implementation
//!
//! Logs messages instead of sending them. Used in development when no
//! Brevo API key is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use fest_shared::utils::email::{is_valid_email, mask_email};

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Mock mail service for development and testing
#[derive(Clone)]
pub struct MockMailService {
    /// Number of messages "sent"
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
    /// Whether to print messages to the console
    console_output: bool,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(simulate_failure)),
            console_output,
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        if !is_valid_email(to) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                masked
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(email = %masked, "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", to);
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", html);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            subject = %subject,
            "Mail sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
