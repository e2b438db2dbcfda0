//! Google Sheets v4 ledger
//!
//! One instance targets one sheet (tab) of one spreadsheet. The email lives
//! in column F and rows are addressed with 1-based numbers.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use fest_core::domain::entities::{ColumnRange, Ledger, RowIndex, EMAIL_COLUMN_INDEX};
use fest_core::errors::DomainResult;
use fest_core::repositories::LedgerRepository;
use fest_shared::utils::email::{emails_match, mask_email};

use super::auth::ServiceAccountAuth;
use crate::InfrastructureError;

/// Sheets API root
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const VALUE_INPUT_OPTION: (&str, &str) = ("valueInputOption", "USER_ENTERED");

/// Spreadsheet and sheet a ledger is stored in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTarget {
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl SheetTarget {
    pub fn new(spreadsheet_id: impl Into<String>, sheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// `{sheet}!{cells}` A1 notation
    pub fn range(&self, cells: &str) -> String {
        format!("{}!{}", self.sheet_name, cells)
    }
}

/// Body and response of the values endpoints
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl ValueRange {
    fn rows(values: Vec<Vec<String>>) -> Self {
        Self {
            range: None,
            major_dimension: Some("ROWS".to_string()),
            values,
        }
    }
}

/// Whether any cell in a single-column scan matches `email`
fn column_contains(values: &[Vec<String>], email: &str) -> bool {
    values
        .iter()
        .filter_map(|row| row.first())
        .any(|cell| emails_match(cell, email))
}

/// Row number of the first full-width row whose email cell matches
fn find_row(values: &[Vec<String>], email: &str) -> Option<RowIndex> {
    values
        .iter()
        .position(|row| {
            row.get(EMAIL_COLUMN_INDEX)
                .map(|cell| emails_match(cell, email))
                .unwrap_or(false)
        })
        .map(RowIndex::from_position)
}

/// Ledger backed by a Google Sheets tab
pub struct GoogleSheetsLedger {
    client: reqwest::Client,
    auth: Arc<ServiceAccountAuth>,
    target: SheetTarget,
    base_url: String,
}

impl GoogleSheetsLedger {
    pub fn new(
        client: reqwest::Client,
        auth: Arc<ServiceAccountAuth>,
        target: SheetTarget,
    ) -> Self {
        info!(
            sheet = %target.sheet_name,
            service_account = %auth.client_email(),
            "Google Sheets ledger initialized"
        );
        Self {
            client,
            auth,
            target,
            base_url: SHEETS_API_BASE.to_string(),
        }
    }

    pub fn target(&self) -> &SheetTarget {
        &self.target
    }

    /// `{base}/{spreadsheet}/values/{range}[suffix]` with the range percent-encoded
    fn values_url(&self, range: &str, suffix: &str) -> Result<Url, InfrastructureError> {
        build_values_url(&self.base_url, &self.target.spreadsheet_id, range, suffix)
    }

    async fn get_values(&self, cells: &str) -> Result<Vec<Vec<String>>, InfrastructureError> {
        let url = self.values_url(&self.target.range(cells), "")?;
        let token = self.auth.access_token().await?;

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let response = check_status(response, "read").await?;

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Sheets(format!("Invalid values response: {}", e)))?;
        Ok(body.values)
    }
}

fn build_values_url(
    base_url: &str,
    spreadsheet_id: &str,
    range: &str,
    suffix: &str,
) -> Result<Url, InfrastructureError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid sheets base url: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| InfrastructureError::Config("Sheets base url cannot have a path".to_string()))?
        .pop_if_empty()
        .push(spreadsheet_id)
        .push("values")
        .push(&format!("{}{}", range, suffix));
    Ok(url)
}

async fn check_status(
    response: reqwest::Response,
    operation: &str,
) -> Result<reqwest::Response, InfrastructureError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read response body".to_string());
    error!(
        target: "ledger",
        operation = operation,
        status = status.as_u16(),
        "Sheets request failed"
    );
    Err(InfrastructureError::Sheets(format!(
        "{} returned {}: {}",
        operation, status, body
    )))
}

#[async_trait]
impl LedgerRepository for GoogleSheetsLedger {
    async fn email_exists(&self, ledger: Ledger, email: &str) -> DomainResult<bool> {
        let values = self.get_values("F:F").await?;
        let exists = column_contains(&values, email);
        debug!(ledger = %ledger, email = %mask_email(email), exists, "Checked ledger for email");
        Ok(exists)
    }

    async fn append_row(&self, ledger: Ledger, row: Vec<String>) -> DomainResult<()> {
        let url = self.values_url(&self.target.range("A1"), ":append")?;
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .query(&[VALUE_INPUT_OPTION, ("insertDataOption", "INSERT_ROWS")])
            .json(&ValueRange::rows(vec![row]))
            .send()
            .await
            .map_err(InfrastructureError::from)?;
        check_status(response, "append").await?;

        info!(
            ledger = %ledger,
            sheet = %self.target.sheet_name,
            event = "ledger_row_appended",
            "Row appended"
        );
        Ok(())
    }

    async fn find_row_by_email(
        &self,
        ledger: Ledger,
        email: &str,
    ) -> DomainResult<Option<RowIndex>> {
        let values = self.get_values("A:I").await?;
        let row = find_row(&values, email);
        debug!(ledger = %ledger, email = %mask_email(email), row = ?row, "Looked up ledger row");
        Ok(row)
    }

    async fn update_range(
        &self,
        ledger: Ledger,
        row: RowIndex,
        range: ColumnRange,
        values: Vec<String>,
    ) -> DomainResult<()> {
        if values.len() != range.width() {
            return Err(InfrastructureError::Sheets(format!(
                "Range {} expects {} values, got {}",
                range.a1(row),
                range.width(),
                values.len()
            ))
            .into());
        }

        let a1 = self.target.range(&range.a1(row));
        let url = self.values_url(&a1, "")?;
        let token = self.auth.access_token().await?;

        let body = ValueRange {
            range: Some(a1),
            ..ValueRange::rows(vec![values])
        };
        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .query(&[VALUE_INPUT_OPTION])
            .json(&body)
            .send()
            .await
            .map_err(InfrastructureError::from)?;
        check_status(response, "update").await?;

        info!(ledger = %ledger, row = row.0, event = "ledger_range_updated", "Range updated");
        Ok(())
    }
}
