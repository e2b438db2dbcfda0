//! Mail Notifier Trait Adapter
//!
//! Implements the core `NotifierTrait` on top of any infrastructure
//! `MailService`.

use async_trait::async_trait;
use std::sync::Arc;

use fest_core::services::verification::{DeliveryReceipt, NotifierTrait};

use super::mail_service::MailService;

/// Adapter that implements the core NotifierTrait for a mail provider
pub struct MailNotifier {
    inner: Arc<dyn MailService>,
}

impl MailNotifier {
    pub fn new(inner: Arc<dyn MailService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for MailNotifier {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<DeliveryReceipt, String> {
        self.inner
            .send_mail(to, subject, html)
            .await
            .map(|message_id| DeliveryReceipt { message_id })
            .map_err(|e| e.to_string())
    }
}
