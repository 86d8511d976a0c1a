//! Delete User Use Case
//!
//! Admin-only soft delete. The row stays for history; every lookup
//! ignores it from now on.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Delete user use case
pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: i64) -> AuthResult<User> {
        let user = self
            .user_repo
            .soft_delete(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = user.id, "User soft-deleted");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::test_support::InMemoryUserRepository;
    use crate::domain::value_object::{email::Email, person_name::PersonName};
    use platform::password::ClearTextPassword;

    fn seeded_repo() -> Arc<InMemoryUserRepository> {
        let mut user = User::new(
            PersonName::new("Ada", "Lovelace").unwrap(),
            Email::new("ada@example.com").unwrap(),
            ClearTextPassword::new("analytical-engine".to_string())
                .unwrap()
                .hash()
                .unwrap(),
            None,
        );
        user.id = 1;
        Arc::new(InMemoryUserRepository::with_users(vec![user]))
    }

    #[tokio::test]
    async fn test_deleted_user_disappears_from_lookups() {
        let repo = seeded_repo();
        let use_case = DeleteUserUseCase::new(repo.clone());

        let deleted = use_case.execute(1).await.unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(repo.user_count(), 0);

        // Second delete no longer resolves the id
        assert!(matches!(
            use_case.execute(1).await,
            Err(AuthError::UserNotFound)
        ));
    }
}
