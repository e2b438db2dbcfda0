//! Registration service implementation

use chrono::Utc;
use std::sync::Arc;

use fest_shared::utils::email::mask_email;
use fest_shared::utils::validation::first_blank;

use crate::domain::entities::registrant::{ColumnRange, Ledger, LedgerRecord};
use crate::errors::{DomainResult, RegistrationError};
use crate::repositories::LedgerRepository;

use super::types::{DuplicateCheckPolicy, LedgerMatch, PaymentUpdate};

/// Writes registrations and payment updates to the ledgers
pub struct RegistrationService<L: LedgerRepository> {
    ledger: Arc<L>,
    policy: DuplicateCheckPolicy,
}

impl<L: LedgerRepository> RegistrationService<L> {
    pub fn new(ledger: Arc<L>, policy: DuplicateCheckPolicy) -> Self {
        Self { ledger, policy }
    }

    pub fn policy(&self) -> DuplicateCheckPolicy {
        self.policy
    }

    /// Append `record` to its ledger unless its email is already registered there
    ///
    /// Required fields are checked before any ledger call.
    pub async fn register<R: LedgerRecord + ?Sized>(&self, record: &R) -> DomainResult<()> {
        if let Some(field) = first_blank(record.required_fields()) {
            return Err(RegistrationError::MissingField {
                field: field.to_string(),
            }
            .into());
        }

        let ledger = record.ledger();
        let email = record.email().trim();
        let masked = mask_email(email);

        match self.ledger.email_exists(ledger, email).await {
            Ok(true) => {
                tracing::info!(
                    ledger = %ledger,
                    email = %masked,
                    event = "duplicate_registration",
                    "Email already registered"
                );
                return Err(RegistrationError::DuplicateEmail { ledger }.into());
            }
            Ok(false) => {}
            Err(e) => match self.policy {
                DuplicateCheckPolicy::FailOpen => {
                    tracing::warn!(
                        ledger = %ledger,
                        email = %masked,
                        error = %e,
                        event = "duplicate_check_failed",
                        "Duplicate check failed, proceeding with registration"
                    );
                }
                DuplicateCheckPolicy::FailClosed => {
                    tracing::error!(
                        ledger = %ledger,
                        email = %masked,
                        error = %e,
                        event = "duplicate_check_failed",
                        "Duplicate check failed, rejecting registration"
                    );
                    return Err(e);
                }
            },
        }

        self.ledger
            .append_row(ledger, record.to_row(Utc::now()))
            .await
            .map_err(|e| {
                tracing::error!(
                    ledger = %ledger,
                    email = %masked,
                    error = %e,
                    event = "registration_write_failed",
                    "Failed to append registration"
                );
                e
            })?;

        tracing::info!(
            ledger = %ledger,
            email = %masked,
            event = "registration_saved",
            "Registration saved"
        );
        Ok(())
    }

    /// Find the first ledger, in lookup order, holding `email`
    ///
    /// A lookup error aborts the search rather than falling through.
    pub async fn locate(&self, email: &str) -> DomainResult<LedgerMatch> {
        for ledger in Ledger::LOOKUP_ORDER {
            if let Some(row) = self.ledger.find_row_by_email(ledger, email).await? {
                return Ok(LedgerMatch::Found { ledger, row });
            }
        }
        Ok(LedgerMatch::NotFoundAnywhere)
    }

    /// Record a payment against the registration holding `email`
    ///
    /// Student rows get `[status, transaction_id]` in `H:I`; guest rows have
    /// no payment columns and are left untouched.
    pub async fn record_payment(
        &self,
        email: &str,
        transaction_id: &str,
        status: &str,
    ) -> DomainResult<PaymentUpdate> {
        if let Some(field) = first_blank([
            ("email", email),
            ("transactionId", transaction_id),
            ("paymentStatus", status),
        ]) {
            return Err(RegistrationError::MissingField {
                field: field.to_string(),
            }
            .into());
        }

        let email = email.trim();
        let masked = mask_email(email);

        match self.locate(email).await? {
            LedgerMatch::Found { ledger, row } if ledger.has_payment_columns() => {
                self.ledger
                    .update_range(
                        ledger,
                        row,
                        ColumnRange::PAYMENT,
                        vec![status.trim().to_string(), transaction_id.trim().to_string()],
                    )
                    .await?;
                tracing::info!(
                    ledger = %ledger,
                    row = row.0,
                    email = %masked,
                    event = "payment_recorded",
                    "Payment status recorded"
                );
                Ok(PaymentUpdate::Recorded { row })
            }
            LedgerMatch::Found { ledger, .. } => {
                tracing::info!(
                    ledger = %ledger,
                    email = %masked,
                    event = "payment_noop",
                    "Ledger has no payment columns, nothing to update"
                );
                Ok(PaymentUpdate::NoOp { ledger })
            }
            LedgerMatch::NotFoundAnywhere => {
                if let Some(ledger) = Ledger::LOOKUP_ORDER
                    .into_iter()
                    .find(|ledger| !self.ledger.is_persistent(*ledger))
                {
                    tracing::warn!(
                        ledger = %ledger,
                        email = %masked,
                        transaction_id = %transaction_id.trim(),
                        status = %status.trim(),
                        event = "payment_not_persisted",
                        "Ledger not configured, payment update not persisted"
                    );
                    return Ok(PaymentUpdate::NotPersisted { ledger });
                }
                tracing::warn!(
                    email = %masked,
                    event = "payment_record_not_found",
                    "No registration found for payment update"
                );
                Err(RegistrationError::RecordNotFound.into())
            }
        }
    }
}
