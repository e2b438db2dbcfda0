//! Application factory
//!
//! Builds the Actix-web application around an already wired [`AppState`].

use actix_web::{middleware::Logger, web, App};
use tracing_actix_web::TracingLogger;

use fest_core::repositories::LedgerRepository;
use fest_core::services::{NotifierTrait, RateLimiterTrait};
use fest_shared::config::CorsConfig;

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::{configure, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<N, R, L>(
    app_state: web::Data<AppState<N, R, L>>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: NotifierTrait + 'static,
    R: RateLimiterTrait + 'static,
    L: LedgerRepository + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Registration order is inverse of execution: CORS runs first
        .wrap(Logger::default())
        .wrap(TracingLogger::default())
        .wrap(create_cors(cors))
        .configure(configure::<N, R, L>)
        .default_service(web::route().to(not_found))
}
