//! Per-ledger dispatch over independent backends

use async_trait::async_trait;
use std::sync::Arc;

use fest_core::domain::entities::{ColumnRange, Ledger, RowIndex};
use fest_core::errors::DomainResult;
use fest_core::repositories::LedgerRepository;

/// Ledger repository holding one backend for each ledger
#[derive(Clone)]
pub struct RoutingLedger {
    student: Arc<dyn LedgerRepository>,
    guest: Arc<dyn LedgerRepository>,
}

impl RoutingLedger {
    pub fn new(student: Arc<dyn LedgerRepository>, guest: Arc<dyn LedgerRepository>) -> Self {
        Self { student, guest }
    }

    fn backend(&self, ledger: Ledger) -> &dyn LedgerRepository {
        match ledger {
            Ledger::Student => self.student.as_ref(),
            Ledger::Guest => self.guest.as_ref(),
        }
    }
}

#[async_trait]
impl LedgerRepository for RoutingLedger {
    async fn email_exists(&self, ledger: Ledger, email: &str) -> DomainResult<bool> {
        self.backend(ledger).email_exists(ledger, email).await
    }

    async fn append_row(&self, ledger: Ledger, row: Vec<String>) -> DomainResult<()> {
        self.backend(ledger).append_row(ledger, row).await
    }

    async fn find_row_by_email(
        &self,
        ledger: Ledger,
        email: &str,
    ) -> DomainResult<Option<RowIndex>> {
        self.backend(ledger).find_row_by_email(ledger, email).await
    }

    async fn update_range(
        &self,
        ledger: Ledger,
        row: RowIndex,
        range: ColumnRange,
        values: Vec<String>,
    ) -> DomainResult<()> {
        self.backend(ledger)
            .update_range(ledger, row, range, values)
            .await
    }

    fn is_persistent(&self, ledger: Ledger) -> bool {
        self.backend(ledger).is_persistent(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::OfflineLedger;
    use fest_core::testing::InMemoryLedgerRepository;

    fn student_row(email: &str) -> Vec<String> {
        vec![
            "2025-01-01T00:00:00.000Z".to_string(),
            "Asha".to_string(),
            "R1".to_string(),
            "CSE".to_string(),
            "2".to_string(),
            email.to_string(),
            "9999999999".to_string(),
            "pending".to_string(),
            String::new(),
        ]
    }

    #[tokio::test]
    async fn test_routes_each_ledger_to_its_backend() {
        let students = Arc::new(InMemoryLedgerRepository::new());
        let routing = RoutingLedger::new(students.clone(), Arc::new(OfflineLedger::new()));

        routing
            .append_row(Ledger::Student, student_row("asha@college.edu"))
            .await
            .unwrap();
        routing
            .append_row(Ledger::Guest, vec!["guest".to_string(); 7])
            .await
            .unwrap();

        assert_eq!(students.rows(Ledger::Student).len(), 1);
        assert!(students.rows(Ledger::Guest).is_empty());
        assert!(routing
            .email_exists(Ledger::Student, "ASHA@college.edu")
            .await
            .unwrap());
        assert!(!routing
            .email_exists(Ledger::Guest, "asha@college.edu")
            .await
            .unwrap());
        assert!(routing.is_persistent(Ledger::Student));
        assert!(!routing.is_persistent(Ledger::Guest));
    }

    #[tokio::test]
    async fn test_update_reaches_student_backend() {
        let students = Arc::new(InMemoryLedgerRepository::new());
        let routing = RoutingLedger::new(students.clone(), Arc::new(OfflineLedger::new()));
        routing
            .append_row(Ledger::Student, student_row("asha@college.edu"))
            .await
            .unwrap();

        let row = routing
            .find_row_by_email(Ledger::Student, "asha@college.edu")
            .await
            .unwrap()
            .unwrap();
        routing
            .update_range(
                Ledger::Student,
                row,
                ColumnRange::PAYMENT,
                vec!["paid".to_string(), "TXN42".to_string()],
            )
            .await
            .unwrap();

        let stored = &students.rows(Ledger::Student)[0];
        assert_eq!(stored[7], "paid");
        assert_eq!(stored[8], "TXN42");
    }
}
