//! Ledger repository module.

mod r#trait;
pub use r#trait::LedgerRepository;

mod memory;
pub use memory::InMemoryLedgerRepository;
