//! Registrant entities and the ledgers they are written to.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of the email column (F) in every ledger row
pub const EMAIL_COLUMN_INDEX: usize = 5;

/// Payment status written for a fresh student registration
pub const PENDING_STATUS: &str = "pending";

/// The two spreadsheet ledgers; each is its own email namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ledger {
    Student,
    Guest,
}

impl Ledger {
    /// Order in which ledgers are searched when only an email is known
    pub const LOOKUP_ORDER: [Ledger; 2] = [Ledger::Student, Ledger::Guest];

    /// Only the student ledger carries status and transaction columns
    pub fn has_payment_columns(&self) -> bool {
        matches!(self, Ledger::Student)
    }

    /// Number of columns in a row of this ledger
    pub fn column_count(&self) -> usize {
        match self {
            Ledger::Student => 9,
            Ledger::Guest => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ledger::Student => "student",
            Ledger::Guest => "guest",
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based spreadsheet row number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowIndex(pub u32);

impl RowIndex {
    /// Row number for a zero-based position in a scanned column
    pub fn from_position(position: usize) -> Self {
        RowIndex(position as u32 + 1)
    }

    /// Zero-based position of this row
    pub fn position(&self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive column span within a single row, e.g. `H..=I`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub start: char,
    pub end: char,
}

impl ColumnRange {
    /// Status (H) and transaction number (I) of the student ledger
    pub const PAYMENT: ColumnRange = ColumnRange {
        start: 'H',
        end: 'I',
    };

    /// A1 notation for this span on `row`, e.g. `H5:I5`
    pub fn a1(&self, row: RowIndex) -> String {
        format!("{}{}:{}{}", self.start, row, self.end, row)
    }

    /// Zero-based index of the first column
    pub fn start_index(&self) -> usize {
        (self.start as u8 - b'A') as usize
    }

    /// Number of columns spanned
    pub fn width(&self) -> usize {
        (self.end as u8 - self.start as u8) as usize + 1
    }
}

/// RFC 3339 UTC timestamp with millisecond precision, as written to the ledgers
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A registration that can be appended to one of the ledgers
pub trait LedgerRecord: Send + Sync {
    /// Ledger this record belongs to
    fn ledger(&self) -> Ledger;

    /// Registrant email as submitted
    fn email(&self) -> &str;

    /// Required fields as `(name, value)` pairs in form order
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Positional row written to the ledger
    fn to_row(&self, timestamp: DateTime<Utc>) -> Vec<String>;
}

/// Student pass registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub name: String,
    pub reg_no: String,
    pub department: String,
    pub year: String,
    pub email: String,
    pub phone: String,
}

impl LedgerRecord for StudentRegistration {
    fn ledger(&self) -> Ledger {
        Ledger::Student
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("regNo", &self.reg_no),
            ("department", &self.department),
            ("year", &self.year),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
    }

    // Timestamp | Name | Registration Number | Department | Year | Email | Phone | Status |
    // Transaction Number
    fn to_row(&self, timestamp: DateTime<Utc>) -> Vec<String> {
        vec![
            format_timestamp(timestamp),
            self.name.trim().to_string(),
            self.reg_no.trim().to_string(),
            self.department.trim().to_string(),
            self.year.trim().to_string(),
            self.email.trim().to_string(),
            self.phone.trim().to_string(),
            PENDING_STATUS.to_string(),
            String::new(),
        ]
    }
}

/// Guest pass registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRegistration {
    pub name: String,
    pub roll_no: String,
    pub college: String,
    pub department: String,
    pub email: String,
    pub phone: String,
}

impl LedgerRecord for GuestRegistration {
    fn ledger(&self) -> Ledger {
        Ledger::Guest
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("rollNo", &self.roll_no),
            ("college", &self.college),
            ("department", &self.department),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
    }

    // Timestamp | Name | Registration/Roll No | College | Department | Email | Phone
    fn to_row(&self, timestamp: DateTime<Utc>) -> Vec<String> {
        vec![
            format_timestamp(timestamp),
            self.name.trim().to_string(),
            self.roll_no.trim().to_string(),
            self.college.trim().to_string(),
            self.department.trim().to_string(),
            self.email.trim().to_string(),
            self.phone.trim().to_string(),
        ]
    }
}
