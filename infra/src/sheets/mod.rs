//! Sheets Module
//!
//! Registration ledgers stored in Google Sheets.
//!
//! - **Google Sheets**: values API authenticated as a service account
//! - **Offline**: logs writes when a spreadsheet is not configured
//! - **Routing**: one backend per ledger behind a single repository

use std::sync::Arc;
use std::time::Duration;

pub mod auth;
pub mod google_sheets;
pub mod offline;
pub mod routing;

pub use auth::{ServiceAccountAuth, ServiceAccountKey, GOOGLE_TOKEN_URI, SHEETS_SCOPE};
pub use google_sheets::{GoogleSheetsLedger, SheetTarget, SHEETS_API_BASE};
pub use offline::OfflineLedger;
pub use routing::RoutingLedger;

use fest_core::repositories::LedgerRepository;
use fest_shared::config::LedgerConfig;

use crate::InfrastructureError;

/// Build the ledger repository described by `config`
///
/// A ledger without a spreadsheet id is served by [`OfflineLedger`]. A
/// configured spreadsheet requires valid service account credentials.
pub fn create_ledger(config: &LedgerConfig) -> Result<RoutingLedger, InfrastructureError> {
    let student_id = configured(&config.student_spreadsheet_id);
    let guest_id = configured(&config.guest_spreadsheet_id);

    if student_id.is_none() && guest_id.is_none() {
        tracing::warn!("No spreadsheets configured, registrations will only be logged");
        let offline: Arc<dyn LedgerRepository> = Arc::new(OfflineLedger::new());
        return Ok(RoutingLedger::new(offline.clone(), offline));
    }

    let key_json = configured(&config.service_account_json).ok_or_else(|| {
        InfrastructureError::Config(
            "GOOGLE_SERVICE_ACCOUNT must be set when a spreadsheet id is configured".to_string(),
        )
    })?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;
    let auth = Arc::new(ServiceAccountAuth::new(
        ServiceAccountKey::from_json(key_json)?,
        client.clone(),
    )?);

    let backend = |id: Option<&str>, sheet: &str, label: &str| -> Arc<dyn LedgerRepository> {
        match id {
            Some(id) => Arc::new(GoogleSheetsLedger::new(
                client.clone(),
                auth.clone(),
                SheetTarget::new(id, sheet),
            )),
            None => {
                tracing::warn!(ledger = label, "Spreadsheet not configured, using offline ledger");
                Arc::new(OfflineLedger::new())
            }
        }
    };

    Ok(RoutingLedger::new(
        backend(student_id, &config.student_sheet_name, "student"),
        backend(guest_id, &config.guest_sheet_name, "guest"),
    ))
}

fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
