//! Test helpers for integration tests
//!
//! Provides utilities for spawning an in-process test server and making
//! HTTP requests against it. The server runs over an in-memory SQLite
//! store with recording stubs for the outbound clients, so no external
//! services are needed.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use relay_api::{create_app, AppState};
use relay_common::{
    ApiConfig, AppConfig, AppSettings, CompletionConfig, DatabaseConfig, Environment,
    TelegramConfig,
};
use relay_db::{SqliteAuditLogRepository, SqliteRosterRepository};
use relay_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{RecordingCompletion, RecordingTelegram};

/// Public base URL configured for the test server
pub const TEST_PUBLIC_BASE_URL: &str = "https://relay.test";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Completion backend stub handed to the server
    pub completion: Arc<RecordingCompletion>,
    /// Telegram API stub handed to the server
    pub telegram: Arc<RecordingTelegram>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server whose completion backend replies "hello"
    pub async fn start() -> Result<Self> {
        Self::start_with(
            Arc::new(RecordingCompletion::replying("hello")),
            Arc::new(RecordingTelegram::default()),
        )
        .await
    }

    /// Start a test server with the given client stubs
    pub async fn start_with(
        completion: Arc<RecordingCompletion>,
        telegram: Arc<RecordingTelegram>,
    ) -> Result<Self> {
        let config = test_config();

        // In-memory store; a single connection keeps every query on the
        // same database
        let db_config = relay_db::DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            ..Default::default()
        };
        let pool = relay_db::create_pool(&db_config).await?;
        relay_db::run_migrations(&pool).await?;

        let service_context = ServiceContextBuilder::new()
            .pool(pool.clone())
            .roster_repo(Arc::new(SqliteRosterRepository::new(pool.clone())))
            .audit_repo(Arc::new(SqliteAuditLogRepository::new(pool)))
            .completion(completion.clone())
            .telegram(telegram.clone())
            .relay_model(config.completion.relay_model.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("context error: {e}"))?;

        let app = create_app(AppState::new(service_context, config));

        // Bind to an OS-assigned port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            completion,
            telegram,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with a form-encoded body
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(fields).send().await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw body and no content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).body(body).send().await?)
    }
}

/// Create a test configuration over an in-memory store
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "relay-test".to_string(),
            env: Environment::Development,
        },
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        telegram: TelegramConfig {
            bot_token: Some("123:test-token".to_string()),
            public_base_url: TEST_PUBLIC_BASE_URL.to_string(),
            api_base: "https://api.telegram.org".to_string(),
        },
        completion: CompletionConfig {
            api_key: Some("test-key".to_string()),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            relay_model: "deepseek-r1-distill-llama-70b".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Poll a condition until it holds or the timeout elapses
pub async fn wait_for<F>(condition: F, timeout: Duration) -> bool
where
    F: Fn() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
