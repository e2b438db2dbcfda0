//! Startup configuration: tracing subscriber and service wiring

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use fest_core::services::{
    DuplicateCheckPolicy, ExpirySweeper, InMemoryRateLimiter, OtpService, OtpServiceConfig,
    RegistrationService,
};
use fest_infra::mail::{create_mail_service, MailNotifier};
use fest_infra::sheets::{create_ledger, RoutingLedger};
use fest_infra::InfrastructureError;
use fest_shared::config::{AppConfig, LogFormat, LoggingConfig};

use crate::routes::AppState;

/// Services wired for production
pub type ProductionState = AppState<MailNotifier, InMemoryRateLimiter, RoutingLedger>;

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Build the application state and the expiry sweeper from configuration
pub fn build_services(
    config: &AppConfig,
) -> Result<(ProductionState, ExpirySweeper), InfrastructureError> {
    let mail = create_mail_service(&config.mail);
    tracing::info!(provider = mail.provider_name(), "Mail service ready");
    let notifier = Arc::new(MailNotifier::new(mail));

    let rate_limiter = Arc::new(InMemoryRateLimiter::from_config(&config.rate_limit));
    let otp_service = Arc::new(OtpService::new(
        notifier,
        rate_limiter.clone(),
        OtpServiceConfig::from(&config.otp),
    ));

    let ledger = Arc::new(create_ledger(&config.ledger)?);
    let policy = DuplicateCheckPolicy::from_fail_closed(config.ledger.duplicate_check_fail_closed);
    let registration_service = Arc::new(RegistrationService::new(ledger, policy));

    let sweeper = ExpirySweeper::new(
        otp_service.code_store(),
        Duration::from_secs(config.otp.sweep_interval_seconds),
    )
    .with_rate_limiter(rate_limiter);

    let state = AppState {
        otp_service,
        registration_service,
        environment: config.environment,
        trusted_proxies: config.server.trusted_proxies.clone(),
    };
    Ok((state, sweeper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_offline_services() {
        let config = AppConfig::default();
        let (state, sweeper) = build_services(&config).unwrap();

        assert_eq!(
            state.registration_service.policy(),
            DuplicateCheckPolicy::FailOpen
        );
        assert_eq!(sweeper.run_once().total(), 0);
    }
}
