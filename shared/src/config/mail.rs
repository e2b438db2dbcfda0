//! Mail relay configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Supported mail providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Brevo transactional email HTTP API
    Brevo,
    /// Log-only provider for development
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brevo" => Ok(MailProvider::Brevo),
            "mock" | "log" => Ok(MailProvider::Mock),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Transactional mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Provider used to deliver mail
    pub provider: MailProvider,

    /// API key for the provider
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Display name of the sender
    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    /// Sender address
    #[serde(default = "default_sender_email")]
    pub sender_email: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_key: None,
            sender_name: default_sender_name(),
            sender_email: default_sender_email(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Load from `MAIL_*` and `BREVO_API_KEY`
    ///
    /// Without an explicit `MAIL_PROVIDER`, Brevo is selected when an API key
    /// is present.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env_opt("BREVO_API_KEY");
        let provider = env_opt("MAIL_PROVIDER")
            .and_then(|p| p.parse().ok())
            .unwrap_or(if api_key.is_some() {
                MailProvider::Brevo
            } else {
                MailProvider::Mock
            });

        Self {
            provider,
            api_key,
            sender_name: env_opt("MAIL_SENDER_NAME").unwrap_or(defaults.sender_name),
            sender_email: env_opt("MAIL_SENDER_EMAIL").unwrap_or(defaults.sender_email),
            timeout_seconds: env_or("MAIL_TIMEOUT_SECONDS", defaults.timeout_seconds),
        }
    }
}

fn default_sender_name() -> String {
    String::from("VYOMANG")
}

fn default_sender_email() -> String {
    String::from("vyomang.fest@gmail.com")
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Brevo".parse::<MailProvider>().unwrap(), MailProvider::Brevo);
        assert_eq!("log".parse::<MailProvider>().unwrap(), MailProvider::Mock);
        assert!("smtp".parse::<MailProvider>().is_err());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let config = MailConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
