//! Shared stubs and context helpers for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use relay_db::{SqliteAuditLogRepository, SqliteRosterRepository};

use super::completion::{CompletionBackend, CompletionError};
use super::context::{ServiceContext, ServiceContextBuilder};
use super::telegram::{TelegramApi, TelegramError};

/// Completion backend stub with a canned reply and a call counter
pub(crate) struct StubCompletion {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubCompletion {
    pub(crate) fn ok(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for StubCompletion {
    async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or(CompletionError::MalformedResponse("stubbed failure"))
    }
}

/// Telegram API stub that records calls and can fail per method
#[derive(Default)]
pub(crate) struct StubTelegram {
    missing_token: bool,
    fail_delete: Option<u16>,
    fail_set: Option<u16>,
    fail_send: Option<u16>,
    deletes: AtomicUsize,
    set_urls: Mutex<Vec<String>>,
    sent: Mutex<Vec<(i64, String)>>,
}

impl StubTelegram {
    pub(crate) fn missing_token() -> Self {
        Self {
            missing_token: true,
            ..Self::default()
        }
    }

    pub(crate) fn failing_delete(code: u16) -> Self {
        Self {
            fail_delete: Some(code),
            ..Self::default()
        }
    }

    pub(crate) fn failing_set(code: u16) -> Self {
        Self {
            fail_set: Some(code),
            ..Self::default()
        }
    }

    pub(crate) fn failing_send(code: u16) -> Self {
        Self {
            fail_send: Some(code),
            ..Self::default()
        }
    }

    pub(crate) fn delete_webhook_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn set_webhook_calls(&self) -> Vec<String> {
        self.set_urls.lock().expect("lock").clone()
    }

    pub(crate) fn sent_messages(&self) -> Vec<(i64, String)> {
        self.sent.lock().expect("lock").clone()
    }

    fn api_error(code: u16) -> TelegramError {
        TelegramError::Api {
            code,
            body: "stubbed failure".to_string(),
        }
    }
}

#[async_trait]
impl TelegramApi for StubTelegram {
    async fn delete_webhook(
        &self,
        _url: &str,
        _drop_pending_updates: bool,
    ) -> Result<(), TelegramError> {
        if self.missing_token {
            return Err(TelegramError::MissingBotToken);
        }
        if let Some(code) = self.fail_delete {
            return Err(Self::api_error(code));
        }
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_webhook(&self, callback_url: &str) -> Result<(), TelegramError> {
        if self.missing_token {
            return Err(TelegramError::MissingBotToken);
        }
        if let Some(code) = self.fail_set {
            return Err(Self::api_error(code));
        }
        self.set_urls
            .lock()
            .expect("lock")
            .push(callback_url.to_string());
        Ok(())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        if self.missing_token {
            return Err(TelegramError::MissingBotToken);
        }
        if let Some(code) = self.fail_send {
            return Err(Self::api_error(code));
        }
        self.sent
            .lock()
            .expect("lock")
            .push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Build a full service context over a fresh in-memory store
pub(crate) async fn test_context(
    completion: Arc<dyn CompletionBackend>,
    telegram: Arc<dyn TelegramApi>,
) -> ServiceContext {
    let config = relay_db::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    };
    let pool = relay_db::create_pool(&config).await.expect("pool");
    relay_db::run_migrations(&pool).await.expect("migrations");

    ServiceContextBuilder::new()
        .pool(pool.clone())
        .roster_repo(Arc::new(SqliteRosterRepository::new(pool.clone())))
        .audit_repo(Arc::new(SqliteAuditLogRepository::new(pool)))
        .completion(completion)
        .telegram(telegram)
        .relay_model("test-model")
        .build()
        .expect("context")
}
