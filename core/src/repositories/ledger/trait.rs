//! Ledger repository trait defining the interface for registration persistence.

use async_trait::async_trait;

use crate::domain::entities::registrant::{ColumnRange, Ledger, RowIndex};
use crate::errors::DomainResult;

/// Repository trait for the spreadsheet-like registration ledgers
///
/// Rows are positional string vectors; the email lives in column F
/// (index 5) of both ledgers. Implementations report transport failures
/// as `DomainError::External`.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Whether any row of `ledger` carries `email` (case-insensitive)
    async fn email_exists(&self, ledger: Ledger, email: &str) -> DomainResult<bool>;

    /// Append one row at the end of `ledger`
    async fn append_row(&self, ledger: Ledger, row: Vec<String>) -> DomainResult<()>;

    /// Row number of the first row whose email matches (case-insensitive)
    async fn find_row_by_email(&self, ledger: Ledger, email: &str)
        -> DomainResult<Option<RowIndex>>;

    /// Overwrite `range` on `row` with `values` in a single write
    async fn update_range(
        &self,
        ledger: Ledger,
        row: RowIndex,
        range: ColumnRange,
        values: Vec<String>,
    ) -> DomainResult<()>;

    /// Whether writes to `ledger` are actually stored
    ///
    /// Offline backends return `false`; lookups against them never match.
    fn is_persistent(&self, _ledger: Ledger) -> bool {
        true
    }
}
