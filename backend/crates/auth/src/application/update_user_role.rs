//! Update User Role Use Case
//!
//! Admin-only partial update of a user's role and/or team.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Update role input
pub struct UpdateUserRoleInput {
    pub user_id: i64,
    pub role: Option<UserRole>,
    pub team_id: Option<i64>,
}

/// Update user role use case
pub struct UpdateUserRoleUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserRoleUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: UpdateUserRoleInput) -> AuthResult<User> {
        if input.role.is_none() && input.team_id.is_none() {
            return Err(AuthError::Validation(
                "Nothing to update: provide role and/or teamId".to_string(),
            ));
        }

        let user = self
            .user_repo
            .update_role(input.user_id, input.role, input.team_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = user.id, role = %user.role, "User role updated");

        Ok(user)
    }
}
