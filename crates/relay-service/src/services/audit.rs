//! Audit service
//!
//! Read access to the append-only audit trail.

use tracing::instrument;

use crate::dto::AuditEntryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all audit entries, newest first
    #[instrument(skip(self))]
    pub async fn list_entries(&self) -> ServiceResult<Vec<AuditEntryResponse>> {
        let entries = self.ctx.audit_repo().list().await?;
        Ok(entries.iter().map(AuditEntryResponse::from).collect())
    }
}
