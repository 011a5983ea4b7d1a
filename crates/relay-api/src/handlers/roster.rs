//! Roster handlers
//!
//! Endpoints for the audited user roster.

use axum::{extract::State, Json};
use relay_service::{
    AddUserRequest, DeleteUserRequest, DeleteUserResponse, RosterService, RosterUserResponse,
};

use crate::extractors::ValidatedForm;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List roster users, newest first
///
/// GET /main
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<RosterUserResponse>>> {
    let service = RosterService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Add a user to the roster
///
/// POST /add_user
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<AddUserRequest>,
) -> ApiResult<Created<Json<RosterUserResponse>>> {
    let service = RosterService::new(state.service_context());
    let user = service.add_user(request).await?;
    Ok(Created(Json(user)))
}

/// Delete a user from the roster
///
/// POST /delete_user
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<DeleteUserRequest>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let service = RosterService::new(state.service_context());
    let outcome = service.delete_user(request).await?;
    Ok(Json(outcome))
}
