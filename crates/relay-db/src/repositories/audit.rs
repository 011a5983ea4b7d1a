//! SQLite implementation of AuditLogRepository

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use relay_core::entities::{AuditAction, AuditEntry};
use relay_core::error::DomainError;
use relay_core::traits::{AuditLogRepository, RepoResult};

use crate::models::AuditEntryModel;

use super::error::map_db_error;

/// Insert one audit row on any SQLite executor.
///
/// This is the single write path for the audit table: the standalone
/// `append` below uses it against the pool, and the roster repository
/// uses it inside its add/delete transactions.
pub(crate) async fn insert_audit_entry<'e, E>(
    executor: E,
    action: AuditAction,
    username: &str,
    at: DateTime<Utc>,
) -> Result<i64, DomainError>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let result = sqlx::query(
        r"
        INSERT INTO audit_log (action, username, created_at)
        VALUES (?1, ?2, ?3)
        ",
    )
    .bind(action.as_str())
    .bind(username)
    .bind(at)
    .execute(executor)
    .await
    .map_err(map_db_error)?;

    Ok(result.last_insert_rowid())
}

/// SQLite implementation of AuditLogRepository
#[derive(Clone)]
pub struct SqliteAuditLogRepository {
    pool: SqlitePool,
}

impl SqliteAuditLogRepository {
    /// Create a new SqliteAuditLogRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for SqliteAuditLogRepository {
    #[instrument(skip(self))]
    async fn append(&self, action: AuditAction, username: &str) -> RepoResult<AuditEntry> {
        let now = Utc::now().trunc_subsecs(0);
        let id = insert_audit_entry(&self.pool, action, username, now).await?;

        Ok(AuditEntry {
            id,
            action,
            username: username.to_string(),
            created_at: now,
        })
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<AuditEntry>> {
        let models = sqlx::query_as::<_, AuditEntryModel>(
            r"
            SELECT id, action, username, created_at
            FROM audit_log
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(AuditEntry::try_from).collect()
    }
}
