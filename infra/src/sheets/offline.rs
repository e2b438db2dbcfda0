//! Offline ledger used when no spreadsheet is configured
//!
//! Writes are logged instead of persisted. Existence checks report `false`,
//! row lookups find nothing and the ledger reports itself as not persistent.

use async_trait::async_trait;
use tracing::warn;

use fest_core::domain::entities::{ColumnRange, Ledger, RowIndex};
use fest_core::errors::DomainResult;
use fest_core::repositories::LedgerRepository;
use fest_shared::utils::email::mask_email;

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLedger;

impl OfflineLedger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LedgerRepository for OfflineLedger {
    async fn email_exists(&self, ledger: Ledger, email: &str) -> DomainResult<bool> {
        warn!(
            target: "ledger",
            ledger = %ledger,
            email = %mask_email(email),
            "Ledger not configured, skipping duplicate check"
        );
        Ok(false)
    }

    async fn append_row(&self, ledger: Ledger, row: Vec<String>) -> DomainResult<()> {
        warn!(
            target: "ledger",
            ledger = %ledger,
            columns = row.len(),
            row = ?row,
            "Ledger not configured, row not persisted"
        );
        Ok(())
    }

    async fn find_row_by_email(
        &self,
        ledger: Ledger,
        email: &str,
    ) -> DomainResult<Option<RowIndex>> {
        warn!(
            target: "ledger",
            ledger = %ledger,
            email = %mask_email(email),
            "Ledger not configured, no rows to search"
        );
        Ok(None)
    }

    async fn update_range(
        &self,
        ledger: Ledger,
        row: RowIndex,
        range: ColumnRange,
        values: Vec<String>,
    ) -> DomainResult<()> {
        warn!(
            target: "ledger",
            ledger = %ledger,
            range = %range.a1(row),
            values = ?values,
            "Ledger not configured, update not persisted"
        );
        Ok(())
    }

    fn is_persistent(&self, _ledger: Ledger) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_ledger_accepts_writes_and_finds_nothing() {
        let ledger = OfflineLedger::new();

        assert!(!ledger.email_exists(Ledger::Student, "a@b.co").await.unwrap());
        ledger
            .append_row(Ledger::Guest, vec!["t".to_string(); 7])
            .await
            .unwrap();
        assert_eq!(
            ledger.find_row_by_email(Ledger::Student, "a@b.co").await.unwrap(),
            None
        );
        ledger
            .update_range(
                Ledger::Student,
                RowIndex(2),
                ColumnRange::PAYMENT,
                vec!["paid".to_string(), "TXN".to_string()],
            )
            .await
            .unwrap();
        assert!(!ledger.is_persistent(Ledger::Student));
    }
}
