//! List Users Use Case
//!
//! Paginated admin listing with optional role and team filters.

use std::sync::Arc;

use kernel::pagination::Paginated;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilters, UserRepository};
use crate::error::AuthResult;

/// List users use case
pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, filters: UserFilters) -> AuthResult<Paginated<User>> {
        self.user_repo.find_all(&filters).await
    }
}
