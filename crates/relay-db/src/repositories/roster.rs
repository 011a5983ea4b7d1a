//! SQLite implementation of RosterRepository

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use relay_core::entities::{AuditAction, RosterUser};
use relay_core::error::DomainError;
use relay_core::traits::{RepoResult, RosterRepository};

use crate::models::RosterUserModel;

use super::audit::insert_audit_entry;
use super::error::{map_db_error, map_unique_violation};

/// SQLite implementation of RosterRepository
///
/// Each mutation and its audit append run in one transaction: either
/// both commit or neither does. A failed mutation (duplicate name,
/// missing row) drops the transaction before the audit insert, so no
/// orphan entries are written.
#[derive(Clone)]
pub struct SqliteRosterRepository {
    pool: SqlitePool,
}

impl SqliteRosterRepository {
    /// Create a new SqliteRosterRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterRepository for SqliteRosterRepository {
    #[instrument(skip(self))]
    async fn add(&self, name: &str) -> RepoResult<RosterUser> {
        let now = Utc::now().trunc_subsecs(0);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO roster_users (name, created_at)
            VALUES (?1, ?2)
            ",
        )
        .bind(name)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateUser(name.to_string())))?;

        insert_audit_entry(&mut *tx, AuditAction::Add, name, now).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(RosterUser {
            name: name.to_string(),
            created_at: now,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM roster_users
            WHERE name = ?1
            ",
        )
        .bind(name)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let rows_deleted = result.rows_affected();
        if rows_deleted == 0 {
            // Transaction dropped on return: no audit entry for a miss.
            return Err(DomainError::UserNotFound(name.to_string()));
        }

        let now = Utc::now().trunc_subsecs(0);
        insert_audit_entry(&mut *tx, AuditAction::Delete, name, now).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(rows_deleted)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<RosterUser>> {
        let models = sqlx::query_as::<_, RosterUserModel>(
            r"
            SELECT name, created_at
            FROM roster_users
            ORDER BY created_at DESC, name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(RosterUser::from).collect())
    }
}
