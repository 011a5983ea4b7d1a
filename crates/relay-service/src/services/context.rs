//! Service context - dependency container for services
//!
//! Holds the repositories and outbound clients needed by services. The
//! clients are injected here at process startup instead of living in
//! module-level globals, so tests can swap in stubs.

use std::sync::Arc;

use relay_core::traits::{AuditLogRepository, RosterRepository};
use relay_db::SqlitePool;

use super::completion::CompletionBackend;
use super::error::{ServiceError, ServiceResult};
use super::telegram::TelegramApi;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The roster and audit repositories
/// - The completion backend client
/// - The Telegram Bot API client
/// - The model identifier used by the inbound relay
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    roster_repo: Arc<dyn RosterRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,

    // Outbound clients
    completion: Arc<dyn CompletionBackend>,
    telegram: Arc<dyn TelegramApi>,

    // Relay configuration
    relay_model: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        roster_repo: Arc<dyn RosterRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        completion: Arc<dyn CompletionBackend>,
        telegram: Arc<dyn TelegramApi>,
        relay_model: String,
    ) -> Self {
        Self {
            pool,
            roster_repo,
            audit_repo,
            completion,
            telegram,
            relay_model,
        }
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the roster repository
    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the completion backend
    pub fn completion(&self) -> &dyn CompletionBackend {
        self.completion.as_ref()
    }

    /// Get the Telegram Bot API client
    pub fn telegram(&self) -> &dyn TelegramApi {
        self.telegram.as_ref()
    }

    /// Get the model identifier used by the inbound relay
    pub fn relay_model(&self) -> &str {
        &self.relay_model
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("clients", &"...")
            .field("relay_model", &self.relay_model)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    completion: Option<Arc<dyn CompletionBackend>>,
    telegram: Option<Arc<dyn TelegramApi>>,
    relay_model: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            roster_repo: None,
            audit_repo: None,
            completion: None,
            telegram: None,
            relay_model: None,
        }
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn completion(mut self, backend: Arc<dyn CompletionBackend>) -> Self {
        self.completion = Some(backend);
        self
    }

    pub fn telegram(mut self, api: Arc<dyn TelegramApi>) -> Self {
        self.telegram = Some(api);
        self
    }

    pub fn relay_model(mut self, model: impl Into<String>) -> Self {
        self.relay_model = Some(model.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Config` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::config("pool is required"))?,
            self.roster_repo
                .ok_or_else(|| ServiceError::config("roster_repo is required"))?,
            self.audit_repo
                .ok_or_else(|| ServiceError::config("audit_repo is required"))?,
            self.completion
                .ok_or_else(|| ServiceError::config("completion is required"))?,
            self.telegram
                .ok_or_else(|| ServiceError::config("telegram is required"))?,
            self.relay_model
                .ok_or_else(|| ServiceError::config("relay_model is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
