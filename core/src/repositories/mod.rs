pub mod ledger;

pub use ledger::{InMemoryLedgerRepository, LedgerRepository};
