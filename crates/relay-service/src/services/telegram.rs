//! Telegram Bot API client
//!
//! Thin typed wrapper over the provider control API: webhook
//! registration (`deleteWebhook` / `setWebhook`) and out-of-band message
//! delivery (`sendMessage`). Every call is one HTTP round-trip with a
//! request timeout; no provider state is cached locally.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::instrument;

/// Telegram Bot API failure taxonomy
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// The bot token is required configuration for every provider call.
    #[error("Telegram bot token is not configured")]
    MissingBotToken,

    #[error("Telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram API error {code}: {body}")]
    Api { code: u16, body: String },
}

/// Seam for the provider API, so the webhook controller and the relay
/// pipeline can be exercised against a stub.
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Remove the current webhook registration.
    async fn delete_webhook(&self, url: &str, drop_pending_updates: bool)
        -> Result<(), TelegramError>;

    /// Point the webhook registration at the given callback URL.
    async fn set_webhook(&self, callback_url: &str) -> Result<(), TelegramError>;

    /// Deliver a message to a chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct DeleteWebhookRequest<'a> {
    url: &'a str,
    drop_pending_updates: bool,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
}

// ============================================================================
// HTTP client
// ============================================================================

/// Telegram Bot API client over reqwest
pub struct HttpTelegramApi {
    http: reqwest::Client,
    api_base: String,
    bot_token: Option<String>,
}

impl HttpTelegramApi {
    /// Create a new client with a per-request timeout.
    ///
    /// The bot token is optional at construction; every call fails with
    /// [`TelegramError::MissingBotToken`] while it is absent.
    pub fn new(
        api_base: impl Into<String>,
        bot_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
            bot_token,
        })
    }

    /// Build the URL for a bot method call.
    fn method_url(&self, method: &str) -> Result<String, TelegramError> {
        let token = self
            .bot_token
            .as_deref()
            .ok_or(TelegramError::MissingBotToken)?;
        Ok(format!(
            "{}/bot{token}/{method}",
            self.api_base.trim_end_matches('/')
        ))
    }

    /// Check the provider response status, mapping non-success to an
    /// API error with the response body attached.
    async fn check_status(response: reqwest::Response) -> Result<(), TelegramError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(TelegramError::Api {
            code: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl TelegramApi for HttpTelegramApi {
    #[instrument(skip(self))]
    async fn delete_webhook(
        &self,
        url: &str,
        drop_pending_updates: bool,
    ) -> Result<(), TelegramError> {
        let endpoint = self.method_url("deleteWebhook")?;
        let response = self
            .http
            .post(&endpoint)
            .json(&DeleteWebhookRequest {
                url,
                drop_pending_updates,
            })
            .send()
            .await?;
        Self::check_status(response).await
    }

    #[instrument(skip(self))]
    async fn set_webhook(&self, callback_url: &str) -> Result<(), TelegramError> {
        let endpoint = self.method_url("setWebhook")?;
        let response = self
            .http
            .post(&endpoint)
            .query(&[("url", callback_url)])
            .send()
            .await?;
        Self::check_status(response).await
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let endpoint = self.method_url("sendMessage")?;
        let response = self
            .http
            .post(&endpoint)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?;
        Self::check_status(response).await
    }
}
