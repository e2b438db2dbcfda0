//! One-time code endpoints

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use fest_core::repositories::LedgerRepository;
use fest_core::services::{NotifierTrait, RateLimiterTrait};
use fest_shared::types::{ApiResponse, VerifyResponse};
use fest_shared::utils::email::mask_email;

use crate::dto::{SendOtpRequest, VerifyOtpRequest};
use crate::handlers::{
    domain_error_response, extract_client_ip, validation_error_response, verify_error_response,
};

use super::AppState;

/// Handler for POST /api/send-otp
///
/// Mails a fresh 6-digit code to `email`. Requests are rate limited per
/// client address.
///
/// ```json
/// { "email": "student@college.edu" }
/// ```
pub async fn send_otp<N, R, L>(
    req: HttpRequest,
    state: web::Data<AppState<N, R, L>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let client_ip = extract_client_ip(&req, &state.trusted_proxies);
    tracing::info!(
        email = %mask_email(&request.email),
        ip = %client_ip,
        "Processing send-otp request"
    );

    match state.otp_service.request_code(&request.email, &client_ip).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/verify-otp
///
/// ```json
/// { "email": "student@college.edu", "otp": "482913" }
/// ```
pub async fn verify_otp<N, R, L>(
    state: web::Data<AppState<N, R, L>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(VerifyResponse::rejected("Invalid email or OTP"));
    }

    match state
        .otp_service
        .verify_code(&request.email, request.otp.trim())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(VerifyResponse::verified()),
        Err(error) => verify_error_response(&error),
    }
}
