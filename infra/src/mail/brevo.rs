//! Brevo Mail Service Implementation
//!
//! Sends transactional email through the Brevo v3 SMTP API. Delivery
//! failures are returned to the caller, never swallowed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use fest_shared::config::MailConfig;
use fest_shared::utils::email::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Brevo transactional email endpoint
pub const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

/// Brevo mail service configuration
#[derive(Debug, Clone)]
pub struct BrevoConfig {
    /// Brevo API key
    pub api_key: String,
    /// Display name of the sender
    pub sender_name: String,
    /// Sender address
    pub sender_email: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Endpoint the message is posted to
    pub endpoint: String,
}

impl BrevoConfig {
    /// Build from the shared mail configuration; requires an API key
    pub fn from_mail_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| InfrastructureError::Config("BREVO_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key: api_key.to_string(),
            sender_name: config.sender_name.clone(),
            sender_email: config.sender_email.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            endpoint: BREVO_ENDPOINT.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct Sender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

/// Request body of `POST /v3/smtp/email`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Sender<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    html_content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    #[serde(default)]
    message_id: Option<String>,
}

/// Brevo mail service implementation
pub struct BrevoMailService {
    client: reqwest::Client,
    config: BrevoConfig,
}

impl BrevoMailService {
    /// Create a new Brevo mail service
    pub fn new(config: BrevoConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        info!(
            sender = %mask_email(&config.sender_email),
            "Brevo mail service initialized"
        );

        Ok(Self { client, config })
    }

    fn request_body<'a>(
        &'a self,
        to: &'a str,
        subject: &'a str,
        html: &'a str,
    ) -> SendEmailRequest<'a> {
        SendEmailRequest {
            sender: Sender {
                name: &self.config.sender_name,
                email: &self.config.sender_email,
            },
            to: vec![Recipient { email: to }],
            subject,
            html_content: html,
        }
    }
}

#[async_trait]
impl MailService for BrevoMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("api-key", &self.config.api_key)
            .header("accept", "application/json")
            .json(&self.request_body(to, subject, html))
            .send()
            .await
            .map_err(|e| {
                error!(
                    target: "mail_service",
                    provider = "brevo",
                    email = %masked,
                    error = %e,
                    "Brevo request failed"
                );
                InfrastructureError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            error!(
                target: "mail_service",
                provider = "brevo",
                email = %masked,
                status = status.as_u16(),
                "Brevo rejected the message"
            );
            return Err(InfrastructureError::Mail(format!(
                "Brevo returned {}: {}",
                status, body
            )));
        }

        let payload: SendEmailResponse = response.json().await.unwrap_or(SendEmailResponse {
            message_id: None,
        });
        let message_id = payload
            .message_id
            .unwrap_or_else(|| format!("brevo_{}", uuid::Uuid::new_v4()));

        info!(
            target: "mail_service",
            provider = "brevo",
            email = %masked,
            message_id = %message_id,
            "Mail sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Brevo"
    }
}
