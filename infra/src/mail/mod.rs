//! Mail Service Module
//!
//! Transactional email providers used to deliver one-time codes.
//!
//! - **Mail Service Trait**: common interface for all providers
//! - **Brevo**: production delivery over the Brevo HTTP API
//! - **Mock**: console output for development
//! - **Notifier adapter**: bridges a provider to the core `NotifierTrait`

use std::sync::Arc;

pub mod brevo;
pub mod mail_service;
pub mod mock_mail;
pub mod notifier_adapter;

pub use brevo::{BrevoConfig, BrevoMailService, BREVO_ENDPOINT};
pub use mail_service::MailService;
pub use mock_mail::MockMailService;
pub use notifier_adapter::MailNotifier;

use fest_shared::config::{MailConfig, MailProvider};

/// Create a mail service based on configuration
///
/// Brevo is used when selected and an API key is present; anything else
/// falls back to the mock provider with a warning.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailService> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockMailService::new()),
        MailProvider::Brevo => {
            match BrevoConfig::from_mail_config(config).and_then(BrevoMailService::new) {
                Ok(service) => Arc::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Brevo mail service: {}", e);
                    tracing::warn!("Falling back to mock mail service");
                    Arc::new(MockMailService::new())
                }
            }
        }
    }
}
