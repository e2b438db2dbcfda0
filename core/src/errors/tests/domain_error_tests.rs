//! Unit tests for domain error types

use crate::domain::entities::registrant::Ledger;
use crate::errors::{DomainError, OtpError, RegistrationError};

#[test]
fn test_otp_error_messages() {
    assert_eq!(OtpError::InvalidAddress.to_string(), "Invalid email address");
    assert_eq!(
        OtpError::RateLimited { retry_after_seconds: 30 }.to_string(),
        "Rate limit exceeded. Try again later."
    );
    // Dispatch reason stays out of the client-facing message
    let dispatch = OtpError::DispatchFailed {
        reason: "relay returned 401".to_string(),
    };
    assert!(!dispatch.to_string().contains("401"));
}

#[test]
fn test_registration_error_messages() {
    let missing = RegistrationError::MissingField {
        field: "regNo".to_string(),
    };
    assert!(missing.to_string().starts_with("All fields are required"));
    assert!(missing.to_string().contains("regNo"));

    let duplicate = RegistrationError::DuplicateEmail {
        ledger: Ledger::Guest,
    };
    assert_eq!(duplicate.to_string(), "Email already registered");
}

#[test]
fn test_domain_error_bridges_are_transparent() {
    let error: DomainError = OtpError::InvalidOrExpired.into();
    assert_eq!(error.to_string(), "Invalid or expired OTP");
    assert!(matches!(error, DomainError::Otp(OtpError::InvalidOrExpired)));

    let error: DomainError = RegistrationError::RecordNotFound.into();
    assert!(matches!(
        error,
        DomainError::Registration(RegistrationError::RecordNotFound)
    ));
}

#[test]
fn test_external_error_names_service() {
    let error = DomainError::external("sheets", "timeout");
    assert_eq!(error.to_string(), "sheets error: timeout");
}
