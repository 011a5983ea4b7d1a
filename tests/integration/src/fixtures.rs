//! Test fixtures: recording stubs for the outbound clients and local
//! response shapes for deserializing API bodies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;

use relay_service::{CompletionBackend, CompletionError, TelegramApi, TelegramError};

// ============================================================================
// Outbound client stubs
// ============================================================================

/// Completion backend stub with a canned reply and a call counter
pub struct RecordingCompletion {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl RecordingCompletion {
    /// Always reply with the given text
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with a backend error
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls observed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for RecordingCompletion {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or(CompletionError::MalformedResponse("stubbed failure"))
    }
}

/// Telegram API stub that records every call
#[derive(Default)]
pub struct RecordingTelegram {
    fail_set: Option<u16>,
    deletes: AtomicUsize,
    set_urls: Mutex<Vec<String>>,
    sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingTelegram {
    /// Fail the set-webhook call with the given provider status
    pub fn failing_set(code: u16) -> Self {
        Self {
            fail_set: Some(code),
            ..Self::default()
        }
    }

    /// Number of delete-webhook calls observed
    pub fn delete_webhook_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// Callback URLs passed to set-webhook
    pub fn set_webhook_calls(&self) -> Vec<String> {
        self.set_urls.lock().expect("lock").clone()
    }

    /// Messages delivered via send-message
    pub fn sent_messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().expect("lock").clone()
    }
}

#[async_trait]
impl TelegramApi for RecordingTelegram {
    async fn delete_webhook(
        &self,
        _url: &str,
        _drop_pending_updates: bool,
    ) -> Result<(), TelegramError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_webhook(&self, callback_url: &str) -> Result<(), TelegramError> {
        if let Some(code) = self.fail_set {
            return Err(TelegramError::Api {
                code,
                body: "stubbed failure".to_string(),
            });
        }
        self.set_urls
            .lock()
            .expect("lock")
            .push(callback_url.to_string());
        Ok(())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        self.sent
            .lock()
            .expect("lock")
            .push((chat_id, text.to_string()));
        Ok(())
    }
}

// ============================================================================
// Response shapes
// ============================================================================

/// Roster user body
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Delete outcome body
#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    pub username: String,
    pub deleted: u64,
}

/// Audit entry body
#[derive(Debug, Deserialize)]
pub struct AuditEntryBody {
    pub id: i64,
    pub action: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Completion reply body
#[derive(Debug, Deserialize)]
pub struct ReplyBody {
    pub model: String,
    pub reply: String,
}

/// Webhook control status body
#[derive(Debug, Deserialize)]
pub struct WebhookStatusBody {
    pub state: String,
    pub detail: String,
}

/// Error envelope body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetailBody,
}

/// Error detail body
#[derive(Debug, Deserialize)]
pub struct ErrorDetailBody {
    pub code: String,
    pub message: String,
}
