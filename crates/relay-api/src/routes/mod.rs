//! Route definitions
//!
//! The operator and relay surfaces keep the original root-level paths.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{audit, completions, health, roster, webhook};
use crate::state::AppState;

/// Create the main router with all routes (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .merge(roster_routes())
        .merge(completion_routes())
        .merge(webhook_routes())
}

/// Health check routes (exported separately)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Roster and audit routes
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/main", get(roster::list_users))
        .route("/add_user", post(roster::add_user))
        .route("/delete_user", post(roster::delete_user))
        .route("/logs", get(audit::list_logs))
}

/// Direct completion routes, one per supported model
fn completion_routes() -> Router<AppState> {
    Router::new()
        .route("/llama_reply", post(completions::llama_reply))
        .route("/deepseek_reply", post(completions::deepseek_reply))
}

/// Webhook control and inbound relay routes
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/telegram", get(webhook::register).post(webhook::register))
        .route(
            "/stop_telegram",
            get(webhook::unregister).post(webhook::unregister),
        )
        .route("/webhook", post(webhook::receive_update))
}
