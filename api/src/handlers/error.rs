//! Mapping of domain and request errors to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use fest_core::errors::{DomainError, OtpError, RegistrationError};
use fest_shared::errors::{error_codes, ErrorResponse};
use fest_shared::types::VerifyResponse;

/// Status code and error code for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Otp(otp) => match otp {
            OtpError::InvalidAddress => (StatusCode::BAD_REQUEST, error_codes::EMAIL_INVALID),
            OtpError::InvalidInput { .. } | OtpError::InvalidOrExpired => {
                (StatusCode::BAD_REQUEST, error_codes::OTP_INVALID)
            }
            OtpError::RateLimited { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, error_codes::RATE_LIMIT_EXCEEDED)
            }
            OtpError::DispatchFailed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::MAIL_ERROR)
            }
        },
        DomainError::Registration(reg) => match reg {
            RegistrationError::MissingField { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
            }
            RegistrationError::DuplicateEmail { .. } => {
                (StatusCode::CONFLICT, error_codes::DUPLICATE_EMAIL)
            }
            RegistrationError::RecordNotFound => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::RECORD_NOT_FOUND)
            }
        },
        DomainError::External { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::LEDGER_ERROR)
        }
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Client-facing message; collaborator and internal details stay in the logs
fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::External { .. } | DomainError::Internal { .. } => {
            "An internal error occurred".to_string()
        }
        other => other.to_string(),
    }
}

/// `{success:false, message, error}` response for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);
    if status.is_server_error() {
        tracing::error!(error = %error, code, "Request failed");
    } else {
        tracing::warn!(error = %error, code, "Request rejected");
    }

    let mut builder = HttpResponse::build(status);
    if let DomainError::Otp(OtpError::RateLimited { retry_after_seconds }) = error {
        builder.insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()));
    }
    builder.json(ErrorResponse::new(code, public_message(error)))
}

/// `{verified:false, message}` response used by code verification
pub fn verify_error_response(error: &DomainError) -> HttpResponse {
    let (status, code) = classify(error);
    tracing::warn!(error = %error, code, "Verification rejected");
    HttpResponse::build(status).json(VerifyResponse::rejected(public_message(error)))
}

/// 400 response for request bodies that fail field validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    tracing::warn!(fields = ?fields, "Request validation failed");

    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        format!("Invalid request data: {}", fields.join(", ")),
    ))
}

/// Turn malformed JSON bodies into the endpoint's error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Malformed request body");

    let message = format!("Invalid request body: {}", err);
    let response = if req.path().ends_with("/verify-otp") {
        HttpResponse::BadRequest().json(VerifyResponse::rejected(message))
    } else {
        HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message))
    };
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fest_core::domain::entities::Ledger;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (OtpError::InvalidAddress.into(), StatusCode::BAD_REQUEST),
            (OtpError::InvalidOrExpired.into(), StatusCode::BAD_REQUEST),
            (
                OtpError::RateLimited { retry_after_seconds: 30 }.into(),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                OtpError::DispatchFailed { reason: "x".into() }.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RegistrationError::MissingField { field: "name".into() }.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistrationError::DuplicateEmail { ledger: Ledger::Guest }.into(),
                StatusCode::CONFLICT,
            ),
            (RegistrationError::RecordNotFound.into(), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::external("ledger", "down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(classify(&error).0, expected, "{:?}", error);
        }
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let error = OtpError::RateLimited {
            retry_after_seconds: 42,
        };
        let response = domain_error_response(&error.into());
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "42"
        );
    }

    #[test]
    fn test_external_details_are_hidden() {
        let error = DomainError::external("ledger", "token for svc@x leaked");
        assert_eq!(public_message(&error), "An internal error occurred");
    }
}
