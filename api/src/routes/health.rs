use actix_web::{web, HttpResponse};

use fest_core::repositories::LedgerRepository;
use fest_core::services::{NotifierTrait, RateLimiterTrait};
use fest_shared::types::HealthResponse;

use super::AppState;

/// Handler for GET /health
pub async fn health_check<N, R, L>(state: web::Data<AppState<N, R, L>>) -> HttpResponse
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    HttpResponse::Ok().json(HealthResponse::healthy(
        env!("CARGO_PKG_VERSION"),
        state.environment.to_string(),
    ))
}
