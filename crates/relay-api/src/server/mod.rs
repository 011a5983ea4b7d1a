//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use relay_common::{AppConfig, AppError};
use relay_db::{SqliteAuditLogRepository, SqliteRosterRepository};
use relay_service::{GroqCompletionClient, HttpTelegramApi, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and apply the schema
    info!("Connecting to SQLite...");
    let db_config = relay_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let pool = relay_db::create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    relay_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("SQLite connection established");

    let timeout = Duration::from_secs(config.completion.timeout_secs);

    // Create outbound clients; credentials stay optional here and gate
    // the individual operations instead
    let telegram = HttpTelegramApi::new(
        config.telegram.api_base.clone(),
        config.telegram.bot_token.clone(),
        timeout,
    )
    .map_err(|e| AppError::Config(e.to_string()))?;

    let completion = GroqCompletionClient::new(
        config.completion.base_url.clone(),
        config.completion.api_key.clone(),
        timeout,
    )
    .map_err(|e| AppError::Config(e.to_string()))?;

    // Create repositories
    let roster_repo = Arc::new(SqliteRosterRepository::new(pool.clone()));
    let audit_repo = Arc::new(SqliteAuditLogRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .roster_repo(roster_repo)
        .audit_repo(audit_repo)
        .completion(Arc::new(completion))
        .telegram(Arc::new(telegram))
        .relay_model(config.completion.relay_model.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
