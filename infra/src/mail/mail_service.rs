//! Mail Service Interface
//!
//! Defines the trait for transactional mail providers.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Mail service trait for sending HTML email
///
/// Implementations include:
/// - Brevo transactional email API
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send an HTML message to a single recipient
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If the provider rejected or failed the send
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError>;

    /// Get the service provider name (e.g. "Brevo", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
