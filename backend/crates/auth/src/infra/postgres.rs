//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::pagination::Paginated;
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilters, UserRepository};
use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

const USER_COLUMNS: &str = "id, first_name, last_name, email, password_hash, \
     role, team_id, created_at, updated_at, deleted_at";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND deleted_at IS NULL",
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn save(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                first_name,
                last_name,
                email,
                password_hash,
                role,
                team_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.name.first())
        .bind(user.name.last())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.id())
        .bind(user.team_id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AuthError::EmailTaken
            }
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn update_role(
        &self,
        id: i64,
        role: Option<UserRole>,
        team_id: Option<i64>,
    ) -> AuthResult<Option<User>> {
        // Update and re-read inside one transaction so the returned entity
        // reflects exactly the write that happened
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE users SET
                role = COALESCE($2, role),
                team_id = COALESCE($3, team_id),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .bind(role.map(|r| r.id()))
        .bind(team_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1",
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(row.into_user()?))
    }

    async fn soft_delete(&self, id: i64) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users SET
                deleted_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn search_by_name(&self, prefix: &str) -> AuthResult<Vec<User>> {
        let pattern = format!("{}%", prefix);

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users
            WHERE deleted_at IS NULL
              AND (first_name ILIKE $1 OR last_name ILIKE $1)
            ORDER BY first_name ASC, last_name ASC
            "#,
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }

    async fn find_all(&self, filters: &UserFilters) -> AuthResult<Paginated<User>> {
        // Shared null-bind predicate; only the ORDER BY direction is
        // interpolated, and it comes from a closed enum
        let role_id = filters.role.map(|r| r.id());

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM users
            WHERE deleted_at IS NULL
              AND ($1::smallint IS NULL OR role = $1)
              AND ($2::bigint IS NULL OR team_id = $2)
            "#,
        )
        .bind(role_id)
        .bind(filters.team_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT {USER_COLUMNS} FROM users
            WHERE deleted_at IS NULL
              AND ($1::smallint IS NULL OR role = $1)
              AND ($2::bigint IS NULL OR team_id = $2)
            ORDER BY id {}
            LIMIT $3 OFFSET $4
            "#,
            filters.sort_order.as_sql(),
        ))
        .bind(role_id)
        .bind(filters.team_id)
        .bind(filters.page.limit() as i64)
        .bind(filters.page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let items = rows
            .into_iter()
            .map(|r| r.into_user())
            .collect::<AuthResult<Vec<_>>>()?;

        Ok(Paginated { items, total })
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: i16,
    team_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(&self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            id: self.id,
            name: PersonName::from_db(self.first_name, self.last_name),
            email: Email::from_db(self.email),
            password_hash,
            role: UserRole::from_id(self.role).unwrap_or_default(),
            team_id: self.team_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}
