//! Repository traits (ports) for the storage layer

mod repositories;

pub use repositories::{AuditLogRepository, RepoResult, RosterRepository};
