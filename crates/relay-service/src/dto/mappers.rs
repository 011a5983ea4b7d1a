//! Entity to response mappers

use relay_core::entities::{AuditEntry, RosterUser};

use super::responses::{AuditEntryResponse, RosterUserResponse};

impl From<&RosterUser> for RosterUserResponse {
    fn from(user: &RosterUser) -> Self {
        Self {
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&AuditEntry> for AuditEntryResponse {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            id: entry.id,
            action: entry.action,
            username: entry.username.clone(),
            created_at: entry.created_at,
        }
    }
}
