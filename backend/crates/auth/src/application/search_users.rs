//! Search Users Use Case
//!
//! Name-prefix lookup used by the kudos recipient picker.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Search users use case
pub struct SearchUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SearchUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, query: &str) -> AuthResult<Vec<User>> {
        let prefix = query.trim();
        if prefix.is_empty() {
            return Err(AuthError::Validation(
                "Search query is required".to_string(),
            ));
        }

        self.user_repo.search_by_name(prefix).await
    }
}
