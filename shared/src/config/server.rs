//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or, Environment};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Proxy addresses whose `X-Forwarded-For` / `X-Real-IP` headers are honored
    #[serde(default)]
    pub trusted_proxies: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5004,
            workers: 0, // Use all CPU cores
            keep_alive: default_keep_alive(),
            max_payload_size: default_max_payload_size(),
            trusted_proxies: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `SERVER_HOST`, `PORT` / `SERVER_PORT`, `SERVER_WORKERS` and
    /// `TRUSTED_PROXIES` (comma-separated)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = env_opt("PORT")
            .or_else(|| env_opt("SERVER_PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: env_opt("SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers: env_or("SERVER_WORKERS", defaults.workers),
            keep_alive: env_or("SERVER_KEEP_ALIVE", defaults.keep_alive),
            max_payload_size: env_or("SERVER_MAX_PAYLOAD_SIZE", defaults.max_payload_size),
            trusted_proxies: env_opt("TRUSTED_PROXIES")
                .map(|list| parse_list(&list))
                .unwrap_or(defaults.trusted_proxies),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            max_age: 3600,
        }
    }

    /// Defaults for the given environment
    pub fn for_environment(env: Environment) -> Self {
        if env.is_development() {
            Self::development()
        } else {
            Self::default()
        }
    }

    /// Environment defaults overridden by `ALLOWED_ORIGINS` and `CORS_MAX_AGE`
    pub fn from_env(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        if let Some(origins) = env_opt("ALLOWED_ORIGINS") {
            config.allowed_origins = parse_list(&origins);
        }
        config.max_age = env_or("CORS_MAX_AGE", config.max_age);
        config
    }

    /// Whether every origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn default_keep_alive() -> u64 {
    75 // 75 seconds
}

fn default_max_payload_size() -> usize {
    64 * 1024 // registration forms are small
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://vyomang.onrender.com".to_string(),
        "https://kiyotakakirito.github.io".to_string(),
    ]
}

fn default_max_age() -> usize {
    3600
}
