//! Health check handlers
//!
//! Endpoints for the service banner and liveness/readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use relay_service::{HealthResponse, ReadinessResponse, ServiceInfoResponse};

use crate::state::AppState;

/// Service banner
///
/// GET /
pub async fn index() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::default())
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    // Check database connectivity
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    let response = ReadinessResponse::ready(db_healthy);
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
