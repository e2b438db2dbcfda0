//! Pass registration and payment endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use fest_core::domain::entities::{GuestRegistration, StudentRegistration};
use fest_core::repositories::LedgerRepository;
use fest_core::services::{NotifierTrait, PaymentUpdate, RateLimiterTrait};
use fest_shared::types::ApiResponse;
use fest_shared::utils::email::mask_email;

use crate::dto::{SaveGuestRequest, SaveStudentRequest, UpdatePaymentRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /api/save-student
///
/// ```json
/// { "name": "Asha", "regNo": "RA2111003", "department": "CSE",
///   "year": "2", "email": "asha@college.edu", "phone": "9876543210" }
/// ```
pub async fn save_student<N, R, L>(
    state: web::Data<AppState<N, R, L>>,
    request: web::Json<SaveStudentRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let registration = StudentRegistration::from(request.into_inner());
    tracing::info!(email = %mask_email(&registration.email), "Processing save-student request");

    match state.registration_service.register(&registration).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/save-guest
pub async fn save_guest<N, R, L>(
    state: web::Data<AppState<N, R, L>>,
    request: web::Json<SaveGuestRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let registration = GuestRegistration::from(request.into_inner());
    tracing::info!(email = %mask_email(&registration.email), "Processing save-guest request");

    match state.registration_service.register(&registration).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/update-payment-status
///
/// Guest registrations carry no payment columns; an update for a guest
/// email succeeds without writing.
pub async fn update_payment_status<N, R, L>(
    state: web::Data<AppState<N, R, L>>,
    request: web::Json<UpdatePaymentRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let outcome = state
        .registration_service
        .record_payment(
            &request.email,
            &request.transaction_id,
            &request.payment_status,
        )
        .await;

    match outcome {
        Ok(PaymentUpdate::Recorded { .. }) => HttpResponse::Ok().json(ApiResponse::success()),
        Ok(PaymentUpdate::NoOp { .. }) => HttpResponse::Ok().json(
            ApiResponse::success_with_message("No payment columns for this registration"),
        ),
        Ok(PaymentUpdate::NotPersisted { .. }) => HttpResponse::Ok().json(
            ApiResponse::success_with_message("Ledger offline, payment status not persisted"),
        ),
        Err(error) => domain_error_response(&error),
    }
}
