//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use relay_core::entities::AuditAction;
use serde::Serialize;

// ============================================================================
// Roster Responses
// ============================================================================

/// A roster user as returned by the list and add endpoints
#[derive(Debug, Clone, Serialize)]
pub struct RosterUserResponse {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a delete operation
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    pub username: String,
    /// Number of rows removed (always ≥ 1 on success)
    pub deleted: u64,
}

// ============================================================================
// Audit Responses
// ============================================================================

/// An audit entry as returned by the logs endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntryResponse {
    pub id: i64,
    pub action: AuditAction,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Completion Responses
// ============================================================================

/// A model reply for the direct completion endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub model: String,
    pub reply: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Service banner for the index endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfoResponse {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            database,
        }
    }
}
