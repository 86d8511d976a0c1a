//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::KudosId;
use kernel::pagination::{Paginated, SortOrder};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entity::category::Category;
use crate::domain::entity::kudos::{Kudos, KudosDetails};
use crate::domain::entity::team::Team;
use crate::domain::repository::{
    CategoryRepository, KudosFilters, KudosRepository, KudosSearchFilters, TeamRepository,
};
use crate::domain::value_object::entity_name::EntityName;
use crate::error::{KudosError, KudosResult};

// Display names are resolved at read time. Recipient and creator joins are
// inner (a kudos with a deleted party disappears from reads); team and
// category joins are left (a deleted reference row only blanks its name).
const KUDOS_SELECT: &str = r#"
    SELECT
        k.id,
        k.recipient_id,
        ru.first_name || ' ' || ru.last_name AS recipient_name,
        k.team_id,
        t.name AS team_name,
        k.category_id,
        c.name AS category_name,
        k.message,
        k.created_by,
        cu.first_name || ' ' || cu.last_name AS created_by_name,
        k.created_at
    FROM kudos k
    INNER JOIN users ru ON ru.id = k.recipient_id
    INNER JOIN users cu ON cu.id = k.created_by
    LEFT JOIN teams t ON t.id = k.team_id AND t.deleted_at IS NULL
    LEFT JOIN categories c ON c.id = k.category_id AND c.deleted_at IS NULL
"#;

const KUDOS_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM kudos k
    INNER JOIN users ru ON ru.id = k.recipient_id
    INNER JOIN users cu ON cu.id = k.created_by
"#;

const LIVE_PREDICATE: &str =
    " WHERE k.deleted_at IS NULL AND ru.deleted_at IS NULL AND cu.deleted_at IS NULL";

/// PostgreSQL-backed kudos, team, and category repository
#[derive(Clone)]
pub struct PgKudosRepository {
    pool: PgPool,
}

impl PgKudosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_list_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &KudosFilters) {
    if let Some(recipient_id) = filters.recipient_id {
        qb.push(" AND k.recipient_id = ").push_bind(recipient_id);
    }
    if let Some(team_id) = filters.team_id {
        qb.push(" AND k.team_id = ").push_bind(team_id);
    }
    if let Some(category_id) = filters.category_id {
        qb.push(" AND k.category_id = ").push_bind(category_id);
    }
}

// ============================================================================
// Kudos Repository Implementation
// ============================================================================

impl KudosRepository for PgKudosRepository {
    async fn create(&self, kudos: &Kudos) -> KudosResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kudos (
                id,
                recipient_id,
                team_id,
                category_id,
                message,
                created_by,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(kudos.id.into_uuid())
        .bind(kudos.recipient_id)
        .bind(kudos.team_id)
        .bind(kudos.category_id)
        .bind(&kudos.message)
        .bind(kudos.created_by)
        .bind(kudos.created_at)
        .bind(kudos.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: KudosId) -> KudosResult<Option<KudosDetails>> {
        let row = sqlx::query_as::<_, KudosDetailsRow>(&format!(
            "{KUDOS_SELECT}{LIVE_PREDICATE} AND k.id = $1",
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(KudosDetailsRow::into_details))
    }

    async fn find_all(&self, filters: &KudosFilters) -> KudosResult<Paginated<KudosDetails>> {
        // Independent count over the same predicate
        let mut count_qb = QueryBuilder::new(KUDOS_COUNT);
        count_qb.push(LIVE_PREDICATE);
        push_list_filters(&mut count_qb, filters);

        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut qb = QueryBuilder::new(KUDOS_SELECT);
        qb.push(LIVE_PREDICATE);
        push_list_filters(&mut qb, filters);
        qb.push(" ORDER BY k.created_at ");
        qb.push(filters.sort_order.unwrap_or(SortOrder::Desc).as_sql());
        qb.push(" LIMIT ").push_bind(filters.page.limit() as i64);
        qb.push(" OFFSET ").push_bind(filters.page.offset());

        let rows: Vec<KudosDetailsRow> =
            qb.build_query_as().fetch_all(&self.pool).await?;

        let items = rows.into_iter().map(KudosDetailsRow::into_details).collect();

        Ok(Paginated { items, total })
    }

    async fn search(
        &self,
        query: &str,
        filters: &KudosSearchFilters,
    ) -> KudosResult<Paginated<KudosDetails>> {
        let pattern = format!("{}%", query);

        let mut qb = QueryBuilder::new(KUDOS_SELECT);
        qb.push(LIVE_PREDICATE);
        qb.push(" AND (ru.first_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR ru.last_name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR k.message ILIKE ")
            .push_bind(pattern)
            .push(")");
        if let Some(team_id) = filters.team_id {
            qb.push(" AND k.team_id = ").push_bind(team_id);
        }
        if let Some(category_id) = filters.category_id {
            qb.push(" AND k.category_id = ").push_bind(category_id);
        }
        qb.push(" ORDER BY k.created_at DESC");
        qb.push(" LIMIT ").push_bind(filters.page.limit() as i64);
        qb.push(" OFFSET ").push_bind(filters.page.offset());

        let rows: Vec<KudosDetailsRow> =
            qb.build_query_as().fetch_all(&self.pool).await?;

        // total is the capped row count of this page, by contract
        let total = rows.len() as i64;
        let items = rows.into_iter().map(KudosDetailsRow::into_details).collect();

        Ok(Paginated { items, total })
    }
}

// ============================================================================
// Team Repository Implementation
// ============================================================================

impl TeamRepository for PgKudosRepository {
    async fn find_all_teams(&self) -> KudosResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, NamedRow>(
            "SELECT id, name, created_at, updated_at, deleted_at \
             FROM teams WHERE deleted_at IS NULL ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NamedRow::into_team).collect())
    }

    async fn find_team_by_id(&self, id: i64) -> KudosResult<Option<Team>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "SELECT id, name, created_at, updated_at, deleted_at \
             FROM teams WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NamedRow::into_team))
    }

    async fn create_team(&self, team: &Team) -> KudosResult<Team> {
        let row = sqlx::query_as::<_, NamedRow>(
            "INSERT INTO teams (name, created_at, updated_at) VALUES ($1, $2, $3) \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(team.name.as_str())
        .bind(team.created_at)
        .bind(team.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "team"))?;

        Ok(row.into_team())
    }

    async fn update_team(&self, id: i64, name: &EntityName) -> KudosResult<Option<Team>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "UPDATE teams SET name = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "team"))?;

        Ok(row.map(NamedRow::into_team))
    }

    async fn soft_delete_team(&self, id: i64) -> KudosResult<Option<Team>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "UPDATE teams SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NamedRow::into_team))
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgKudosRepository {
    async fn find_all_categories(&self) -> KudosResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, NamedRow>(
            "SELECT id, name, created_at, updated_at, deleted_at \
             FROM categories WHERE deleted_at IS NULL ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NamedRow::into_category).collect())
    }

    async fn find_category_by_id(&self, id: i64) -> KudosResult<Option<Category>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "SELECT id, name, created_at, updated_at, deleted_at \
             FROM categories WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NamedRow::into_category))
    }

    async fn create_category(&self, category: &Category) -> KudosResult<Category> {
        let row = sqlx::query_as::<_, NamedRow>(
            "INSERT INTO categories (name, created_at, updated_at) VALUES ($1, $2, $3) \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "category"))?;

        Ok(row.into_category())
    }

    async fn update_category(
        &self,
        id: i64,
        name: &EntityName,
    ) -> KudosResult<Option<Category>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "UPDATE categories SET name = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(id)
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_name_conflict(e, "category"))?;

        Ok(row.map(NamedRow::into_category))
    }

    async fn soft_delete_category(&self, id: i64) -> KudosResult<Option<Category>> {
        let row = sqlx::query_as::<_, NamedRow>(
            "UPDATE categories SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING id, name, created_at, updated_at, deleted_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NamedRow::into_category))
    }
}

fn map_name_conflict(e: sqlx::Error, entity: &'static str) -> KudosError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            KudosError::NameTaken(entity)
        }
        _ => KudosError::Database(e),
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct KudosDetailsRow {
    id: Uuid,
    recipient_id: i64,
    recipient_name: String,
    team_id: i64,
    team_name: Option<String>,
    category_id: i64,
    category_name: Option<String>,
    message: String,
    created_by: i64,
    created_by_name: String,
    created_at: DateTime<Utc>,
}

impl KudosDetailsRow {
    fn into_details(self) -> KudosDetails {
        KudosDetails {
            id: KudosId::from_uuid(self.id),
            recipient_id: self.recipient_id,
            recipient_name: self.recipient_name,
            team_id: self.team_id,
            team_name: self.team_name,
            category_id: self.category_id,
            category_name: self.category_name,
            message: self.message,
            created_by: self.created_by,
            created_by_name: self.created_by_name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NamedRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl NamedRow {
    fn into_team(self) -> Team {
        Team {
            id: self.id,
            name: EntityName::from_db(self.name),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }

    fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: EntityName::from_db(self.name),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}
