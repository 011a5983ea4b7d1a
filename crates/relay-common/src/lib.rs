//! # relay-common
//!
//! Shared utilities: environment-driven configuration, the application-wide
//! error type, and tracing subscriber setup.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    ApiConfig, AppConfig, AppSettings, CompletionConfig, ConfigError, DatabaseConfig, Environment,
    TelegramConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
