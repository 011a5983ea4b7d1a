//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the audit_log table
#[derive(Debug, Clone, FromRow)]
pub struct AuditEntryModel {
    pub id: i64,
    /// Action kind stored as its wire form (`ADD` / `DELETE`)
    pub action: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
