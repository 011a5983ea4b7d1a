//! # relay-service
//!
//! Application layer containing business logic, outbound clients, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AddUserRequest, AuditEntryResponse, DeleteUserRequest, DeleteUserResponse, HealthResponse,
    PromptRequest, ReadinessResponse, ReplyResponse, RosterUserResponse, ServiceInfoResponse,
};
pub use services::{
    AuditService, CompletionBackend, CompletionError, CompletionService, GroqCompletionClient,
    HttpTelegramApi, RelayOutcome, RelayService, RosterService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TelegramApi, TelegramError,
    TelegramUpdate, UpdateKind, WebhookService, WebhookState, WebhookStatus, FALLBACK_REPLY,
};
