//! In-memory one-time code store

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::otp_record::{OtpRecord, DEFAULT_TTL_SECONDS};

/// Result of checking a candidate code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// No live code for this key
    NotFound,
    /// The code had expired; the entry was removed
    Expired,
    /// A live code exists but the candidate differs; the entry is kept
    Mismatch,
    /// The candidate matched; the entry was removed
    Success,
}

/// Map of normalized email to its single live code
///
/// Every operation is one short critical section on a `std::sync::Mutex`;
/// callers never hold the lock across an `.await`.
pub struct CodeStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, OtpRecord>>,
}

impl CodeStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh code for `key`, replacing any previous one
    pub fn issue(&self, key: &str) -> OtpRecord {
        self.issue_at(key, Utc::now())
    }

    pub fn issue_at(&self, key: &str, now: DateTime<Utc>) -> OtpRecord {
        let record = OtpRecord::new(key, now, self.ttl);
        self.lock().insert(key.to_string(), record.clone());
        record
    }

    /// Check `candidate` against the live code for `key`
    pub fn verify(&self, key: &str, candidate: &str) -> VerifyOutcome {
        self.verify_at(key, candidate, Utc::now())
    }

    pub fn verify_at(&self, key: &str, candidate: &str, now: DateTime<Utc>) -> VerifyOutcome {
        let mut entries = self.lock();
        let Some(record) = entries.get(key) else {
            return VerifyOutcome::NotFound;
        };

        if record.is_expired_at(now) {
            entries.remove(key);
            return VerifyOutcome::Expired;
        }

        if !codes_match(&record.code, candidate) {
            return VerifyOutcome::Mismatch;
        }

        entries.remove(key);
        VerifyOutcome::Success
    }

    /// Delete every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, record| !record.is_expired_at(now));
        before - entries.len()
    }

    /// Live record for `key`, if any
    pub fn get(&self, key: &str) -> Option<OtpRecord> {
        self.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CodeStore {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECONDS as i64))
    }
}

fn codes_match(stored: &str, candidate: &str) -> bool {
    if stored.len() != candidate.len() {
        return false;
    }
    constant_time_eq(stored.as_bytes(), candidate.as_bytes())
}
