//! Audit log handlers

use axum::{extract::State, Json};
use relay_service::{AuditEntryResponse, AuditService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List audit entries, newest first
///
/// GET /logs
pub async fn list_logs(State(state): State<AppState>) -> ApiResult<Json<Vec<AuditEntryResponse>>> {
    let service = AuditService::new(state.service_context());
    let entries = service.list_entries().await?;
    Ok(Json(entries))
}
