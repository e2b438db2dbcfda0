use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use fest_api::app::create_app;
use fest_api::config::{build_services, init_tracing};
use fest_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    tracing::info!(
        environment = %config.environment,
        "Starting fest registration API server"
    );

    let (state, sweeper) = build_services(&config).context("Failed to initialize services")?;
    let state = web::Data::new(state);
    let sweeper = Arc::new(sweeper).start();

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    sweeper.stop().await;
    tracing::info!("Server stopped");

    result.context("Server error")
}
