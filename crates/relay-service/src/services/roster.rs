//! Roster service
//!
//! Handles add/delete/list operations against the user roster. Every
//! committed mutation carries exactly one audit entry; the transaction
//! boundary lives in the repository.

use tracing::{info, instrument};

use crate::dto::{AddUserRequest, DeleteUserRequest, DeleteUserResponse, RosterUserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a user to the roster
    #[instrument(skip(self, request))]
    pub async fn add_user(&self, request: AddUserRequest) -> ServiceResult<RosterUserResponse> {
        let name = request.username.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Username is required"));
        }

        let user = self.ctx.roster_repo().add(name).await?;
        info!(user = %user.name, "Roster user added");

        Ok(RosterUserResponse::from(&user))
    }

    /// Delete a user from the roster
    #[instrument(skip(self, request))]
    pub async fn delete_user(&self, request: DeleteUserRequest) -> ServiceResult<DeleteUserResponse> {
        let name = request.username.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Username is required"));
        }

        let deleted = self.ctx.roster_repo().delete(name).await?;
        info!(user = %name, deleted, "Roster user deleted");

        Ok(DeleteUserResponse {
            username: name.to_string(),
            deleted,
        })
    }

    /// List all roster users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<RosterUserResponse>> {
        let users = self.ctx.roster_repo().list().await?;
        Ok(users.iter().map(RosterUserResponse::from).collect())
    }
}
