//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Database row shape for the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    last_accessed_at: Option<DateTime<Utc>>,
    access_count: i64,
    expires_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            last_accessed_at: row.last_accessed_at,
            access_count: row.access_count,
            expires_at: row.expires_at,
        }
    }
}

const LINK_COLUMNS: &str =
    "id, original_url, short_code, created_at, last_accessed_at, access_count, expires_at";

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters throughout; short-code uniqueness is enforced by
/// the `links_short_code_key` constraint rather than pre-checks, so create
/// and rename are atomic.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (original_url, short_code, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE original_url = $1 ORDER BY id LIMIT 1"
        ))
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn record_access(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE links
             SET access_count = access_count + 1, last_accessed_at = $2
             WHERE short_code = $1",
        )
        .bind(code)
        .bind(accessed_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn rename_code(
        &self,
        old_code: &str,
        new_code: &str,
    ) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "UPDATE links SET short_code = $2 WHERE short_code = $1 RETURNING {LINK_COLUMNS}"
        ))
        .bind(old_code)
        .bind(new_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_unused(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM links WHERE last_accessed_at IS NULL OR last_accessed_at < $1",
        )
        .bind(cutoff)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_expired(&self, now: DateTime<Utc>) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {LINK_COLUMNS} FROM links
             WHERE expires_at IS NOT NULL AND expires_at < $1
             ORDER BY expires_at"
        ))
        .bind(now)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
