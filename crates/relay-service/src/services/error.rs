//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use relay_core::DomainError;
use std::fmt;

use super::completion::CompletionError;
use super::telegram::TelegramError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (duplicate, not found, storage fault)
    Domain(DomainError),

    /// Validation error
    Validation(String),

    /// Completion backend failure
    Completion(CompletionError),

    /// Provider control API failure
    WebhookControl(TelegramError),

    /// Missing or invalid configuration
    Config(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Completion(e) => write!(f, "{e}"),
            Self::WebhookControl(e) => write!(f, "{e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Completion(e) => Some(e),
            Self::WebhookControl(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::Validation(_) => 400,
            Self::Completion(CompletionError::MissingApiKey) => 500,
            Self::Completion(_) => 502,
            Self::WebhookControl(TelegramError::MissingBotToken) => 500,
            Self::WebhookControl(_) => 502,
            Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Completion(CompletionError::MissingApiKey) => "CONFIG_ERROR",
            Self::Completion(_) => "COMPLETION_ERROR",
            Self::WebhookControl(TelegramError::MissingBotToken) => "CONFIG_ERROR",
            Self::WebhookControl(_) => "WEBHOOK_CONTROL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<CompletionError> for ServiceError {
    fn from(err: CompletionError) -> Self {
        Self::Completion(err)
    }
}

impl From<TelegramError> for ServiceError {
    fn from(err: TelegramError) -> Self {
        Self::WebhookControl(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
