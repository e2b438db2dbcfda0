//! Test doubles for the collaborator traits
//!
//! Compiled for this crate's tests and, through the `test-utils` feature,
//! for other crates' tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fest_shared::utils::email::emails_match;

use crate::services::verification::{DeliveryReceipt, NotifierTrait};

pub use crate::repositories::ledger::InMemoryLedgerRepository;

/// An email captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub message_id: String,
}

impl SentMail {
    /// First run of six consecutive ASCII digits in the body
    pub fn code(&self) -> Option<String> {
        self.html
            .as_bytes()
            .windows(6)
            .find(|w| w.iter().all(u8::is_ascii_digit))
            .map(|w| String::from_utf8_lossy(w).into_owned())
    }
}

/// Notifier that records every message instead of delivering it
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentMail>>,
    should_fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose sends fail until switched back
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.set_should_fail(true);
        notifier
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<SentMail> {
        self.lock().last().cloned()
    }

    /// Code from the latest message to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        self.lock()
            .iter()
            .rev()
            .find(|mail| emails_match(&mail.to, to))
            .and_then(SentMail::code)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SentMail>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NotifierTrait for RecordingNotifier {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<DeliveryReceipt, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("mail relay unavailable".to_string());
        }
        let message_id = format!("recorded-{}", uuid::Uuid::new_v4());
        self.lock().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
            message_id: message_id.clone(),
        });
        Ok(DeliveryReceipt { message_id })
    }
}
