//! Roster user entity - a named user tracked by the admin surface

use chrono::{DateTime, SubsecRound, Utc};

/// A roster entry, keyed by its unique display name.
///
/// Users are created by an add operation and destroyed by a delete
/// operation; they are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterUser {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl RosterUser {
    /// Create a new RosterUser stamped with the current wall-clock time.
    ///
    /// Timestamps are stored at second granularity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now().trunc_subsecs(0),
        }
    }
}
