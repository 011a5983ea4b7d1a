//! Audit entry entity <-> model mapper

use relay_core::entities::{AuditAction, AuditEntry};
use relay_core::error::DomainError;

use crate::models::AuditEntryModel;

/// Convert AuditEntryModel to AuditEntry entity
///
/// Fallible: a row with an unrecognized action string indicates a
/// corrupted table and surfaces as a storage fault.
impl TryFrom<AuditEntryModel> for AuditEntry {
    type Error = DomainError;

    fn try_from(model: AuditEntryModel) -> Result<Self, Self::Error> {
        let action: AuditAction = model
            .action
            .parse()
            .map_err(|e| DomainError::DatabaseError(format!("audit_log row {}: {e}", model.id)))?;

        Ok(AuditEntry {
            id: model.id,
            action,
            username: model.username,
            created_at: model.created_at,
        })
    }
}
