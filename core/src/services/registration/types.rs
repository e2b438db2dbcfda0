//! Types for registration service results

use crate::domain::entities::registrant::{Ledger, RowIndex};

/// What to do when the duplicate check itself fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateCheckPolicy {
    /// Log a warning and append anyway
    #[default]
    FailOpen,
    /// Abort the registration with the check's error
    FailClosed,
}

impl DuplicateCheckPolicy {
    pub fn from_fail_closed(fail_closed: bool) -> Self {
        if fail_closed {
            DuplicateCheckPolicy::FailClosed
        } else {
            DuplicateCheckPolicy::FailOpen
        }
    }
}

/// Result of locating an email across the ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerMatch {
    /// First match in lookup order
    Found { ledger: Ledger, row: RowIndex },
    NotFoundAnywhere,
}

/// Result of recording a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentUpdate {
    /// Status and transaction number were written to `row`
    Recorded { row: RowIndex },
    /// The email belongs to a ledger without payment columns; nothing written
    NoOp { ledger: Ledger },
    /// No match, but `ledger` is not persisted so the record cannot be looked up
    NotPersisted { ledger: Ledger },
}
