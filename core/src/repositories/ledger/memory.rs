//! In-process ledger used by tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fest_shared::utils::email::emails_match;

use crate::domain::entities::registrant::{ColumnRange, Ledger, RowIndex, EMAIL_COLUMN_INDEX};
use crate::errors::{DomainError, DomainResult};

use super::r#trait::LedgerRepository;

/// Ledger rows kept in memory, with switchable failure injection
#[derive(Default)]
pub struct InMemoryLedgerRepository {
    rows: Mutex<HashMap<Ledger, Vec<Vec<String>>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    not_persisted: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `email_exists` and `find_row_by_email` fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make `append_row` and `update_range` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Report every ledger as not persisted, like an unconfigured backend
    pub fn set_not_persisted(&self, not_persisted: bool) {
        self.not_persisted.store(not_persisted, Ordering::SeqCst);
    }

    /// Snapshot of every row in `ledger`
    pub fn rows(&self, ledger: Ledger) -> Vec<Vec<String>> {
        self.lock().get(&ledger).cloned().unwrap_or_default()
    }

    /// Number of successful writes (appends and range updates)
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Insert a row directly, bypassing failure injection
    pub fn seed(&self, ledger: Ledger, row: Vec<String>) {
        self.lock().entry(ledger).or_default().push(row);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Ledger, Vec<Vec<String>>>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::external("ledger", "injected read failure"));
        }
        Ok(())
    }

    fn check_writes(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::external("ledger", "injected write failure"));
        }
        Ok(())
    }

    fn position_of(&self, ledger: Ledger, email: &str) -> Option<usize> {
        self.lock().get(&ledger).and_then(|rows| {
            rows.iter().position(|row| {
                row.get(EMAIL_COLUMN_INDEX)
                    .map(|cell| emails_match(cell, email))
                    .unwrap_or(false)
            })
        })
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn email_exists(&self, ledger: Ledger, email: &str) -> DomainResult<bool> {
        self.check_reads()?;
        Ok(self.position_of(ledger, email).is_some())
    }

    async fn append_row(&self, ledger: Ledger, row: Vec<String>) -> DomainResult<()> {
        self.check_writes()?;
        self.lock().entry(ledger).or_default().push(row);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_row_by_email(
        &self,
        ledger: Ledger,
        email: &str,
    ) -> DomainResult<Option<RowIndex>> {
        self.check_reads()?;
        Ok(self.position_of(ledger, email).map(RowIndex::from_position))
    }

    async fn update_range(
        &self,
        ledger: Ledger,
        row: RowIndex,
        range: ColumnRange,
        values: Vec<String>,
    ) -> DomainResult<()> {
        self.check_writes()?;
        let mut ledgers = self.lock();
        let target = ledgers
            .get_mut(&ledger)
            .and_then(|rows| rows.get_mut(row.position()))
            .ok_or_else(|| DomainError::external("ledger", format!("row {} does not exist", row)))?;

        let start = range.start_index();
        let end = start + range.width().min(values.len());
        if target.len() < end {
            target.resize(end, String::new());
        }
        for (cell, value) in target[start..end].iter_mut().zip(values) {
            *cell = value;
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_persistent(&self, _ledger: Ledger) -> bool {
        !self.not_persisted.load(Ordering::SeqCst)
    }
}
