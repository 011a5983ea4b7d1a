//! Audit entry entity - an immutable record of a single roster mutation

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of roster mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Add,
    Delete,
}

impl AuditAction {
    /// Stable wire/storage form of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = UnknownAuditAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "DELETE" => Ok(Self::Delete),
            other => Err(UnknownAuditAction(other.to_string())),
        }
    }
}

/// Returned when a stored action string is not a known variant.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown audit action: {0}")]
pub struct UnknownAuditAction(pub String);

/// An append-only log record of a roster mutation.
///
/// The subject username is free text and is not required to reference an
/// existing user: entries survive user deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// Auto-incrementing sequence number assigned by the store.
    pub id: i64,
    pub action: AuditAction,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
