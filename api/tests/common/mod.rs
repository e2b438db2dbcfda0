//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use actix_web::web;
use chrono::Duration;
use std::sync::Arc;

use fest_api::routes::AppState;
use fest_core::services::{
    DuplicateCheckPolicy, InMemoryRateLimiter, OtpService, OtpServiceConfig, RegistrationService,
};
use fest_core::testing::{InMemoryLedgerRepository, RecordingNotifier};
use fest_shared::config::{CorsConfig, Environment};

pub type TestState = AppState<RecordingNotifier, InMemoryRateLimiter, InMemoryLedgerRepository>;

/// Services behind a test app, with handles on every double
pub struct Harness {
    pub notifier: Arc<RecordingNotifier>,
    pub limiter: Arc<InMemoryRateLimiter>,
    pub ledger: Arc<InMemoryLedgerRepository>,
    pub state: web::Data<TestState>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_policy(DuplicateCheckPolicy::FailOpen)
    }

    pub fn with_policy(policy: DuplicateCheckPolicy) -> Self {
        Self::build(policy, Vec::new())
    }

    /// Harness whose app honors forwarding headers from `proxy`
    pub fn behind_proxy(proxy: &str) -> Self {
        Self::build(DuplicateCheckPolicy::FailOpen, vec![proxy.to_string()])
    }

    fn build(policy: DuplicateCheckPolicy, trusted_proxies: Vec<String>) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let limiter = Arc::new(InMemoryRateLimiter::new(5, Duration::seconds(60)));
        let ledger = Arc::new(InMemoryLedgerRepository::new());

        let otp_service = Arc::new(OtpService::new(
            notifier.clone(),
            limiter.clone(),
            OtpServiceConfig::default(),
        ));
        let registration_service = Arc::new(RegistrationService::new(ledger.clone(), policy));

        let state = web::Data::new(AppState {
            otp_service,
            registration_service,
            environment: Environment::Development,
            trusted_proxies,
        });

        Self {
            notifier,
            limiter,
            ledger,
            state,
        }
    }

    pub fn cors() -> CorsConfig {
        CorsConfig::development()
    }
}

pub fn student_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Verma",
        "regNo": "RA2111003010",
        "department": "CSE",
        "year": "2",
        "email": email,
        "phone": "9876543210"
    })
}

pub fn guest_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Ravi Kumar",
        "rollNo": "21BCE1001",
        "college": "VIT",
        "department": "ECE",
        "email": email,
        "phone": "9123456780"
    })
}
