//! Registration ledger (spreadsheet) configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Spreadsheets that hold student and guest registrations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Spreadsheet id of the student ledger; unset means offline
    #[serde(default)]
    pub student_spreadsheet_id: Option<String>,

    /// Spreadsheet id of the guest ledger; unset means offline
    #[serde(default)]
    pub guest_spreadsheet_id: Option<String>,

    /// Sheet (tab) name inside the student spreadsheet
    #[serde(default = "default_student_sheet")]
    pub student_sheet_name: String,

    /// Sheet (tab) name inside the guest spreadsheet
    #[serde(default = "default_guest_sheet")]
    pub guest_sheet_name: String,

    /// Service account key JSON used to authenticate against the sheets API
    #[serde(default, skip_serializing)]
    pub service_account_json: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Reject registrations when the duplicate check itself fails
    #[serde(default)]
    pub duplicate_check_fail_closed: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            student_spreadsheet_id: None,
            guest_spreadsheet_id: None,
            student_sheet_name: default_student_sheet(),
            guest_sheet_name: default_guest_sheet(),
            service_account_json: None,
            timeout_seconds: default_timeout(),
            duplicate_check_fail_closed: false,
        }
    }
}

impl LedgerConfig {
    /// Load from `*_SPREADSHEET_ID`, `*_SHEET_NAME`, `GOOGLE_SERVICE_ACCOUNT`,
    /// `LEDGER_TIMEOUT_SECONDS` and `DUPLICATE_CHECK_FAIL_CLOSED`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            student_spreadsheet_id: env_opt("STUDENT_SPREADSHEET_ID"),
            guest_spreadsheet_id: env_opt("GUEST_SPREADSHEET_ID"),
            student_sheet_name: env_opt("STUDENT_SHEET_NAME")
                .unwrap_or(defaults.student_sheet_name),
            guest_sheet_name: env_opt("GUEST_SHEET_NAME").unwrap_or(defaults.guest_sheet_name),
            service_account_json: env_opt("GOOGLE_SERVICE_ACCOUNT"),
            timeout_seconds: env_or("LEDGER_TIMEOUT_SECONDS", defaults.timeout_seconds),
            duplicate_check_fail_closed: env_or(
                "DUPLICATE_CHECK_FAIL_CLOSED",
                defaults.duplicate_check_fail_closed,
            ),
        }
    }
}

fn default_student_sheet() -> String {
    String::from("Student Pass")
}

fn default_guest_sheet() -> String {
    String::from("Guest Pass")
}

fn default_timeout() -> u64 {
    10
}
