//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use crate::token::TokenService;

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Wrong email and wrong password produce the same error
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginOutput { token, user })
    }
}
