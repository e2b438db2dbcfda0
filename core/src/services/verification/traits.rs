//! Traits for notifier integration

use async_trait::async_trait;

/// Acknowledgement returned by a mail relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider message identifier
    pub message_id: String,
}

/// Trait for outbound email delivery
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send an HTML email; errors carry a human-readable reason
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<DeliveryReceipt, String>;
}
