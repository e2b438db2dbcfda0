//! Domain entities representing core business objects.

pub mod otp_record;
pub mod registrant;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use otp_record::{OtpRecord, CODE_LENGTH, DEFAULT_TTL_SECONDS};
pub use registrant::{
    format_timestamp, ColumnRange, GuestRegistration, Ledger, LedgerRecord, RowIndex,
    StudentRegistration, EMAIL_COLUMN_INDEX, PENDING_STATUS,
};
