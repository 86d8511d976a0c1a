//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::repository::{AnalyticsRepository, TopEntry};
use crate::error::AnalyticsResult;

/// PostgreSQL-backed analytics repository
#[derive(Clone)]
pub struct PgAnalyticsRepository {
    pool: PgPool,
}

impl PgAnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AnalyticsRepository for PgAnalyticsRepository {
    async fn top_teams(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: i64,
    ) -> AnalyticsResult<Vec<TopEntry>> {
        let rows = sqlx::query_as::<_, TopEntryRow>(
            r#"
            SELECT t.id, t.name, COUNT(k.id) AS kudos_count
            FROM kudos k
            INNER JOIN teams t ON t.id = k.team_id
            WHERE k.deleted_at IS NULL
              AND t.deleted_at IS NULL
              AND ($1::timestamptz IS NULL OR k.created_at >= $1)
            GROUP BY t.id, t.name
            ORDER BY kudos_count DESC, t.id ASC
            LIMIT $2
            "#,
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TopEntryRow::into_entry).collect())
    }

    async fn top_categories(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: i64,
    ) -> AnalyticsResult<Vec<TopEntry>> {
        let rows = sqlx::query_as::<_, TopEntryRow>(
            r#"
            SELECT c.id, c.name, COUNT(k.id) AS kudos_count
            FROM kudos k
            INNER JOIN categories c ON c.id = k.category_id
            WHERE k.deleted_at IS NULL
              AND c.deleted_at IS NULL
              AND ($1::timestamptz IS NULL OR k.created_at >= $1)
            GROUP BY c.id, c.name
            ORDER BY kudos_count DESC, c.id ASC
            LIMIT $2
            "#,
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TopEntryRow::into_entry).collect())
    }

    async fn count_kudos(&self, cutoff: Option<DateTime<Utc>>) -> AnalyticsResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM kudos \
             WHERE deleted_at IS NULL \
               AND ($1::timestamptz IS NULL OR created_at >= $1)",
        )
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn count_teams(&self) -> AnalyticsResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn count_categories(&self) -> AnalyticsResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TopEntryRow {
    id: i64,
    name: String,
    kudos_count: i64,
}

impl TopEntryRow {
    fn into_entry(self) -> TopEntry {
        TopEntry {
            id: self.id,
            name: self.name,
            kudos_count: self.kudos_count,
        }
    }
}
