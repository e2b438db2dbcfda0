//! Route handlers
//!
//! - `otp`: issuing and verifying one-time codes
//! - `registration`: student and guest passes, payment status
//! - `health`: liveness check

pub mod health;
pub mod otp;
pub mod registration;

use actix_web::web;
use std::sync::Arc;

use fest_core::repositories::LedgerRepository;
use fest_core::services::{NotifierTrait, OtpService, RateLimiterTrait, RegistrationService};
use fest_shared::config::Environment;

/// Application state that holds shared services
pub struct AppState<N, R, L>
where
    N: NotifierTrait,
    R: RateLimiterTrait,
    L: LedgerRepository,
{
    pub otp_service: Arc<OtpService<N, R>>,
    pub registration_service: Arc<RegistrationService<L>>,
    pub environment: Environment,
    /// Peers allowed to set the forwarded client address
    pub trusted_proxies: Vec<String>,
}

/// Register every route under its path
pub fn configure<N, R, L>(cfg: &mut web::ServiceConfig)
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    cfg.route("/health", web::get().to(health::health_check::<N, R, L>))
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(otp::send_otp::<N, R, L>))
                .route("/verify-otp", web::post().to(otp::verify_otp::<N, R, L>))
                .route(
                    "/save-student",
                    web::post().to(registration::save_student::<N, R, L>),
                )
                .route(
                    "/save-guest",
                    web::post().to(registration::save_guest::<N, R, L>),
                )
                .route(
                    "/update-payment-status",
                    web::post().to(registration::update_payment_status::<N, R, L>),
                ),
        );
}
