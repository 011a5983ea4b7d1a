//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, orchestration of domain operations, and the outbound
//! clients for the completion backend and the Telegram Bot API.

pub mod audit;
pub mod completion;
pub mod context;
pub mod error;
pub mod relay;
pub mod roster;
pub mod telegram;
pub mod webhook;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use audit::AuditService;
pub use completion::{
    CompletionBackend, CompletionError, CompletionService, GroqCompletionClient,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use relay::{RelayOutcome, RelayService, TelegramUpdate, UpdateKind, FALLBACK_REPLY};
pub use roster::RosterService;
pub use telegram::{HttpTelegramApi, TelegramApi, TelegramError};
pub use webhook::{WebhookService, WebhookState, WebhookStatus};
