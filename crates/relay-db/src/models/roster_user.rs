//! Roster user database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the roster_users table
#[derive(Debug, Clone, FromRow)]
pub struct RosterUserModel {
    pub name: String,
    pub created_at: DateTime<Utc>,
}
