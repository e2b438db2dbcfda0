//! Unit tests for the registration service

use std::sync::Arc;

use crate::domain::entities::registrant::{
    GuestRegistration, Ledger, LedgerRecord, RowIndex, StudentRegistration,
};
use crate::errors::{DomainError, RegistrationError};
use crate::services::registration::{
    DuplicateCheckPolicy, LedgerMatch, PaymentUpdate, RegistrationService,
};
use crate::testing::InMemoryLedgerRepository;

fn student(email: &str) -> StudentRegistration {
    StudentRegistration {
        name: "Asha Rao".to_string(),
        reg_no: "21CS042".to_string(),
        department: "CSE".to_string(),
        year: "3".to_string(),
        email: email.to_string(),
        phone: "9876543210".to_string(),
    }
}

fn guest(email: &str) -> GuestRegistration {
    GuestRegistration {
        name: "Ravi".to_string(),
        roll_no: "R-17".to_string(),
        college: "City College".to_string(),
        department: "ECE".to_string(),
        email: email.to_string(),
        phone: "9123456780".to_string(),
    }
}

fn service(
    policy: DuplicateCheckPolicy,
) -> (
    RegistrationService<InMemoryLedgerRepository>,
    Arc<InMemoryLedgerRepository>,
) {
    let repo = Arc::new(InMemoryLedgerRepository::new());
    (RegistrationService::new(repo.clone(), policy), repo)
}

#[tokio::test]
async fn test_register_appends_positional_row() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);

    service.register(&student("asha@uni.edu")).await.unwrap();

    let rows = repo.rows(Ledger::Student);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 9);
    assert_eq!(rows[0][5], "asha@uni.edu");
    assert_eq!(rows[0][7], "pending");
    assert_eq!(rows[0][8], "");
    assert!(rows[0][0].ends_with('Z'));
}

#[tokio::test]
async fn test_duplicate_in_same_ledger_is_rejected() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);

    service.register(&student("asha@uni.edu")).await.unwrap();
    let result = service.register(&student("ASHA@uni.edu")).await;

    assert!(matches!(
        result,
        Err(DomainError::Registration(RegistrationError::DuplicateEmail {
            ledger: Ledger::Student
        }))
    ));
    assert_eq!(repo.rows(Ledger::Student).len(), 1);
}

#[tokio::test]
async fn test_same_email_in_other_ledger_is_allowed() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);

    service.register(&student("shared@uni.edu")).await.unwrap();
    service.register(&guest("shared@uni.edu")).await.unwrap();

    assert_eq!(repo.rows(Ledger::Student).len(), 1);
    assert_eq!(repo.rows(Ledger::Guest).len(), 1);
}

#[tokio::test]
async fn test_missing_field_short_circuits_before_ledger() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    repo.set_fail_reads(true);

    let mut record = guest("ravi@city.edu");
    record.college = "   ".to_string();
    let result = service.register(&record).await;

    match result {
        Err(DomainError::Registration(RegistrationError::MissingField { field })) => {
            assert_eq!(field, "college")
        }
        other => panic!("expected missing field, got {:?}", other),
    }
    assert_eq!(repo.write_count(), 0);
}

#[tokio::test]
async fn test_fail_open_appends_when_check_fails() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    repo.set_fail_reads(true);

    service.register(&guest("ravi@city.edu")).await.unwrap();
    assert_eq!(repo.rows(Ledger::Guest).len(), 1);
}

#[tokio::test]
async fn test_fail_closed_rejects_when_check_fails() {
    let (service, repo) = service(DuplicateCheckPolicy::FailClosed);
    repo.set_fail_reads(true);

    let result = service.register(&guest("ravi@city.edu")).await;
    assert!(matches!(result, Err(DomainError::External { .. })));
    assert!(repo.rows(Ledger::Guest).is_empty());
}

#[tokio::test]
async fn test_write_failure_is_external_error() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    repo.set_fail_writes(true);

    let result = service.register(&student("asha@uni.edu")).await;
    assert!(matches!(result, Err(DomainError::External { .. })));
}

#[tokio::test]
async fn test_register_through_trait_object() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    let record: Box<dyn LedgerRecord> = Box::new(guest("dyn@city.edu"));

    service.register(record.as_ref()).await.unwrap();
    assert_eq!(repo.rows(Ledger::Guest).len(), 1);
}

#[tokio::test]
async fn test_record_payment_for_student_writes_h_and_i() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    service.register(&student("first@uni.edu")).await.unwrap();
    service.register(&student("second@uni.edu")).await.unwrap();

    let update = service
        .record_payment("Second@Uni.edu", "TXN-991", "paid")
        .await
        .unwrap();
    assert_eq!(update, PaymentUpdate::Recorded { row: RowIndex(2) });

    let rows = repo.rows(Ledger::Student);
    assert_eq!(rows[1][7], "paid");
    assert_eq!(rows[1][8], "TXN-991");
    assert_eq!(rows[0][7], "pending");
}

#[tokio::test]
async fn test_record_payment_for_guest_is_noop() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    service.register(&guest("ravi@city.edu")).await.unwrap();
    let writes_before = repo.write_count();

    let update = service
        .record_payment("ravi@city.edu", "TXN-1", "paid")
        .await
        .unwrap();
    assert_eq!(
        update,
        PaymentUpdate::NoOp {
            ledger: Ledger::Guest
        }
    );
    assert_eq!(repo.write_count(), writes_before);
    assert_eq!(repo.rows(Ledger::Guest)[0].len(), 7);
}

#[tokio::test]
async fn test_student_match_wins_over_guest() {
    let (service, _) = service(DuplicateCheckPolicy::FailOpen);
    service.register(&guest("both@uni.edu")).await.unwrap();
    service.register(&student("both@uni.edu")).await.unwrap();

    assert_eq!(
        service.locate("both@uni.edu").await.unwrap(),
        LedgerMatch::Found {
            ledger: Ledger::Student,
            row: RowIndex(1)
        }
    );
}

#[tokio::test]
async fn test_record_payment_not_found_anywhere() {
    let (service, _) = service(DuplicateCheckPolicy::FailOpen);

    let result = service.record_payment("ghost@uni.edu", "TXN", "paid").await;
    assert!(matches!(
        result,
        Err(DomainError::Registration(RegistrationError::RecordNotFound))
    ));
}

#[tokio::test]
async fn test_record_payment_against_unpersisted_ledger_succeeds() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    repo.set_not_persisted(true);

    let update = service
        .record_payment("ghost@uni.edu", "TXN", "paid")
        .await
        .unwrap();
    assert_eq!(
        update,
        PaymentUpdate::NotPersisted {
            ledger: Ledger::Student
        }
    );
    assert_eq!(repo.write_count(), 0);
}

#[tokio::test]
async fn test_record_payment_requires_all_fields() {
    let (service, _) = service(DuplicateCheckPolicy::FailOpen);

    let result = service.record_payment("a@uni.edu", "", "paid").await;
    match result {
        Err(DomainError::Registration(RegistrationError::MissingField { field })) => {
            assert_eq!(field, "transactionId")
        }
        other => panic!("expected missing field, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_error_aborts_instead_of_falling_through() {
    let (service, repo) = service(DuplicateCheckPolicy::FailOpen);
    service.register(&guest("ravi@city.edu")).await.unwrap();
    repo.set_fail_reads(true);

    let result = service.record_payment("ravi@city.edu", "TXN", "paid").await;
    assert!(matches!(result, Err(DomainError::External { .. })));
}
