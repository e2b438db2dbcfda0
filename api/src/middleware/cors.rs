//! CORS middleware configuration for the registration frontend.
//!
//! Development allows any origin. Other environments allow only the
//! configured frontend origins.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use fest_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!(origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}
