//! Repository Traits
//!
//! Interface for identity persistence. Implementation is in the
//! infrastructure layer. Every read implicitly excludes soft-deleted rows.

use kernel::pagination::{Page, Paginated, SortOrder};

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::AuthResult;

/// Filters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub team_id: Option<i64>,
    pub page: Page,
    pub sort_order: SortOrder,
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a live user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find a live user by id
    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>>;

    /// Insert a new user; duplicate email surfaces as a conflict
    async fn save(&self, user: &User) -> AuthResult<()>;

    /// Partial update of role and/or team; returns the refreshed entity,
    /// or None if the id does not resolve. Runs update + re-read in one
    /// transaction.
    async fn update_role(
        &self,
        id: i64,
        role: Option<UserRole>,
        team_id: Option<i64>,
    ) -> AuthResult<Option<User>>;

    /// Set the soft-delete marker; returns the now-deleted entity for
    /// confirmation, or None if the id does not resolve
    async fn soft_delete(&self, id: i64) -> AuthResult<Option<User>>;

    /// Prefix match against first or last name
    async fn search_by_name(&self, prefix: &str) -> AuthResult<Vec<User>>;

    /// Paginated listing with optional role/team narrowing. The total is
    /// computed by an independent count query over the same predicate.
    async fn find_all(&self, filters: &UserFilters) -> AuthResult<Paginated<User>>;
}

#[cfg(test)]
pub mod test_support {
    //! In-memory repository for use-case tests.

    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
            }
        }

        pub fn user_count(&self) -> usize {
            self.users
                .lock()
                .unwrap()
                .iter()
                .filter(|u| !u.is_deleted())
                .count()
        }
    }

    impl UserRepository for InMemoryUserRepository {
        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|u| !u.is_deleted() && &u.email == email)
                .cloned())
        }

        async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| !u.is_deleted() && u.id == id).cloned())
        }

        async fn save(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            let mut user = user.clone();
            user.id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            users.push(user);
            Ok(())
        }

        async fn update_role(
            &self,
            id: i64,
            role: Option<UserRole>,
            team_id: Option<i64>,
        ) -> AuthResult<Option<User>> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.iter_mut().find(|u| !u.is_deleted() && u.id == id)
            else {
                return Ok(None);
            };
            if let Some(role) = role {
                user.role = role;
            }
            if let Some(team_id) = team_id {
                user.team_id = Some(team_id);
            }
            user.updated_at = Utc::now();
            Ok(Some(user.clone()))
        }

        async fn soft_delete(&self, id: i64) -> AuthResult<Option<User>> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.iter_mut().find(|u| !u.is_deleted() && u.id == id)
            else {
                return Ok(None);
            };
            user.deleted_at = Some(Utc::now());
            Ok(Some(user.clone()))
        }

        async fn search_by_name(&self, prefix: &str) -> AuthResult<Vec<User>> {
            let prefix = prefix.to_lowercase();
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .filter(|u| {
                    !u.is_deleted()
                        && (u.name.first().to_lowercase().starts_with(&prefix)
                            || u.name.last().to_lowercase().starts_with(&prefix))
                })
                .cloned()
                .collect())
        }

        async fn find_all(&self, filters: &UserFilters) -> AuthResult<Paginated<User>> {
            let users = self.users.lock().unwrap();
            let mut matched: Vec<User> = users
                .iter()
                .filter(|u| {
                    !u.is_deleted()
                        && filters.role.map_or(true, |r| u.role == r)
                        && filters.team_id.map_or(true, |t| u.team_id == Some(t))
                })
                .cloned()
                .collect();
            matched.sort_by_key(|u| u.id);
            if filters.sort_order == SortOrder::Desc {
                matched.reverse();
            }
            let total = matched.len() as i64;
            let items = matched
                .into_iter()
                .skip(filters.page.offset() as usize)
                .take(filters.page.limit() as usize)
                .collect();
            Ok(Paginated { items, total })
        }
    }
}
