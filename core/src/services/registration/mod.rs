//! Registration writer: duplicate-checked appends and payment updates

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
pub use types::{DuplicateCheckPolicy, LedgerMatch, PaymentUpdate};
