//! Application configuration structs
//!
//! Loads configuration from environment variables (and an optional .env
//! file). Secrets that gate individual features — the Telegram bot token
//! and the completion API key — are optional at startup: the roster
//! surface works without them, and the operations that need them fail
//! with a configuration error instead of a silent no-op.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,
    pub completion: CompletionConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ApiConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Telegram Bot API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot authentication token. Absence makes every webhook-control and
    /// relay-delivery operation fail with a configuration error.
    pub bot_token: Option<String>,
    /// Public base URL of this service, used to derive the webhook
    /// callback URL.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Base URL of the provider control API.
    #[serde(default = "default_telegram_api_base")]
    pub api_base: String,
}

/// Completion backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Bearer token for the completion backend.
    pub api_key: Option<String>,
    /// OpenAI-compatible API base URL.
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,
    /// Model identifier used for the inbound relay path.
    #[serde(default = "default_relay_model")]
    pub relay_model: String,
    /// Timeout applied to every outbound HTTP call, in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "relay".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://user.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_completion_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_relay_model() -> String {
    "deepseek-r1-distill-llama-70b".to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a present environment variable has an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ApiConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: match env::var("API_PORT") {
                    Ok(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", s))?,
                    Err(_) => default_port(),
                },
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
            },
            telegram: TelegramConfig {
                bot_token: env::var("TELEGRAM_BOT_TOKEN").ok().filter(|t| !t.is_empty()),
                public_base_url: env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| default_public_base_url()),
                api_base: env::var("TELEGRAM_API_BASE")
                    .unwrap_or_else(|_| default_telegram_api_base()),
            },
            completion: CompletionConfig {
                api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: env::var("COMPLETION_BASE_URL")
                    .unwrap_or_else(|_| default_completion_base_url()),
                relay_model: env::var("RELAY_MODEL").unwrap_or_else(|_| default_relay_model()),
                timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_http_timeout_secs),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
