//! Webhook subscription controller
//!
//! Manages the provider-side webhook registration. The provider holds
//! the only authoritative copy of the subscription state; every
//! operation here is a live round-trip, and the resulting state is
//! derived from the provider's responses alone.

use serde::Serialize;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::telegram::TelegramError;

/// Webhook subscription state as derived from provider round-trips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookState {
    /// No provider round-trip has established the state
    Unknown,
    Registered,
    Unregistered,
}

/// Outcome of a register/unregister operation, reported to the operator
#[derive(Debug, Clone, Serialize)]
pub struct WebhookStatus {
    pub state: WebhookState,
    pub detail: String,
}

impl WebhookStatus {
    fn new(state: WebhookState, detail: impl Into<String>) -> Self {
        Self {
            state,
            detail: detail.into(),
        }
    }
}

/// Webhook subscription service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register the webhook, pointing the provider at
    /// `{base_url}/webhook`.
    ///
    /// The current registration is deleted first, with
    /// `drop_pending_updates`, so no stale URL or backlog of queued
    /// messages survives a re-registration. Safe to call when already
    /// registered.
    ///
    /// Provider failures are reported in the returned status; only a
    /// missing bot token escapes as an error.
    #[instrument(skip(self))]
    pub async fn register(&self, base_url: &str) -> ServiceResult<WebhookStatus> {
        let base = base_url.trim_end_matches('/');
        let callback_url = format!("{base}/webhook");

        if let Err(e) = self.ctx.telegram().delete_webhook(base, true).await {
            return match e {
                TelegramError::MissingBotToken => Err(ServiceError::from(e)),
                e => {
                    warn!(error = %e, "Webhook cleanup before registration failed");
                    Ok(WebhookStatus::new(
                        WebhookState::Unknown,
                        format!("Failed to reach the Telegram control API: {e}"),
                    ))
                }
            };
        }

        match self.ctx.telegram().set_webhook(&callback_url).await {
            Ok(()) => {
                info!(callback_url = %callback_url, "Telegram webhook registered");
                Ok(WebhookStatus::new(
                    WebhookState::Registered,
                    "The Telegram relay is running.",
                ))
            }
            Err(TelegramError::MissingBotToken) => {
                Err(ServiceError::from(TelegramError::MissingBotToken))
            }
            Err(e) => {
                warn!(error = %e, "Webhook registration failed");
                Ok(WebhookStatus::new(
                    WebhookState::Unregistered,
                    "Failed to start the Telegram relay.",
                ))
            }
        }
    }

    /// Unregister the webhook.
    ///
    /// A no-op success from the provider's perspective when nothing is
    /// registered. On failure the provider state is unchanged and
    /// locally unknown.
    #[instrument(skip(self))]
    pub async fn unregister(&self, base_url: &str) -> ServiceResult<WebhookStatus> {
        let base = base_url.trim_end_matches('/');

        match self.ctx.telegram().delete_webhook(base, true).await {
            Ok(()) => {
                info!("Telegram webhook unregistered");
                Ok(WebhookStatus::new(
                    WebhookState::Unregistered,
                    "The Telegram relay has stopped.",
                ))
            }
            Err(TelegramError::MissingBotToken) => {
                Err(ServiceError::from(TelegramError::MissingBotToken))
            }
            Err(e) => {
                warn!(error = %e, "Webhook unregistration failed");
                Ok(WebhookStatus::new(
                    WebhookState::Unknown,
                    "Failed to stop the Telegram relay.",
                ))
            }
        }
    }
}
