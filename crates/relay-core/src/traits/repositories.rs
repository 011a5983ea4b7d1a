//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern: the domain layer defines
//! what it needs, and the storage layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{AuditAction, AuditEntry, RosterUser};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Roster Repository
// ============================================================================

/// Store of unique named users.
///
/// Every committed mutation appends exactly one audit entry within the
/// same transaction; failed mutations leave both tables untouched.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// Fails with [`DomainError::DuplicateUser`] when the name is already
    /// taken, in which case nothing is written.
    async fn add(&self, name: &str) -> RepoResult<RosterUser>;

    /// Delete a user by name, returning the number of rows removed.
    ///
    /// Fails with [`DomainError::UserNotFound`] when no row matches, in
    /// which case no audit entry is appended.
    async fn delete(&self, name: &str) -> RepoResult<u64>;

    /// List all users, newest first.
    async fn list(&self) -> RepoResult<Vec<RosterUser>>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

/// Append-only log of roster mutations.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry, returning it with its assigned sequence number.
    async fn append(&self, action: AuditAction, username: &str) -> RepoResult<AuditEntry>;

    /// List all entries, newest first.
    async fn list(&self) -> RepoResult<Vec<AuditEntry>>;
}
