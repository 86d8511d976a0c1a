//! User Entity
//!
//! Identity, credential, role, and team membership.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Assigned by storage on insert; 0 until then
    pub id: i64,
    pub name: PersonName,
    /// Unique among non-deleted users
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; set rows are invisible to every lookup
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a user for signup. The role is always TeamMember here;
    /// promotion is a separate admin-only operation.
    pub fn new(
        name: PersonName,
        email: Email,
        password_hash: HashedPassword,
        team_id: Option<i64>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            name,
            email,
            password_hash,
            role: UserRole::TeamMember,
            team_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn full_name(&self) -> String {
        self.name.full()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
