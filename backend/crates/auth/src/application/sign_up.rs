//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, person_name::PersonName};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub team_id: Option<i64>,
}

/// Sign up output
pub struct SignUpOutput {
    /// True when the email already belongs to a live account. The caller
    /// reports this as a non-error signal, not as a failure.
    pub user_exists: bool,
    /// The created user; None when user_exists is true
    pub user: Option<User>,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let name = PersonName::new(&input.first_name, &input.last_name)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Duplicate email short-circuits before any write
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Ok(SignUpOutput {
                user_exists: true,
                user: None,
            });
        }

        let password_hash = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Role is always TeamMember at signup; promotion is admin-only
        let user = User::new(name, email, password_hash, input.team_id);
        match self.user_repo.save(&user).await {
            Ok(()) => {}
            // Lost a race with a concurrent signup for the same email;
            // same non-error signal as the pre-insert check
            Err(AuthError::EmailTaken) => {
                return Ok(SignUpOutput {
                    user_exists: true,
                    user: None,
                });
            }
            Err(e) => return Err(e),
        }

        let user = self
            .user_repo
            .find_by_email(&user.email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = user.id, email = %user.email, "User signed up");

        Ok(SignUpOutput {
            user_exists: false,
            user: Some(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::test_support::InMemoryUserRepository;
    use crate::domain::value_object::user_role::UserRole;

    fn input(email: &str) -> SignUpInput {
        SignUpInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "analytical-engine".to_string(),
            team_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_sign_up_creates_team_member() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        let output = use_case.execute(input("ada@example.com")).await.unwrap();

        assert!(!output.user_exists);
        let user = output.user.unwrap();
        assert_eq!(user.role, UserRole::TeamMember);
        assert!(user.id > 0);
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_reported_without_write() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        use_case.execute(input("ada@example.com")).await.unwrap();
        let output = use_case.execute(input("ada@example.com")).await.unwrap();

        assert!(output.user_exists);
        assert!(output.user.is_none());
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_losing_an_insert_race_reports_user_exists() {
        use crate::domain::entity::user::User;
        use crate::domain::repository::{UserFilters, UserRepository};
        use crate::domain::value_object::email::Email;
        use kernel::pagination::Paginated;

        // Simulates a concurrent signup: the pre-insert lookup sees
        // nothing, then the insert hits the unique email constraint.
        struct RacedRepository;

        impl UserRepository for RacedRepository {
            async fn find_by_email(&self, _email: &Email) -> AuthResult<Option<User>> {
                Ok(None)
            }

            async fn find_by_id(&self, _id: i64) -> AuthResult<Option<User>> {
                Ok(None)
            }

            async fn save(&self, _user: &User) -> AuthResult<()> {
                Err(AuthError::EmailTaken)
            }

            async fn update_role(
                &self,
                _id: i64,
                _role: Option<UserRole>,
                _team_id: Option<i64>,
            ) -> AuthResult<Option<User>> {
                Ok(None)
            }

            async fn soft_delete(&self, _id: i64) -> AuthResult<Option<User>> {
                Ok(None)
            }

            async fn search_by_name(&self, _prefix: &str) -> AuthResult<Vec<User>> {
                Ok(Vec::new())
            }

            async fn find_all(&self, _filters: &UserFilters) -> AuthResult<Paginated<User>> {
                Ok(Paginated {
                    items: Vec::new(),
                    total: 0,
                })
            }
        }

        let use_case = SignUpUseCase::new(Arc::new(RacedRepository));

        let output = use_case.execute(input("ada@example.com")).await.unwrap();

        assert!(output.user_exists);
        assert!(output.user.is_none());
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = SignUpUseCase::new(repo.clone());

        let mut bad = input("ada@example.com");
        bad.password = "short".to_string();

        assert!(matches!(
            use_case.execute(bad).await,
            Err(AuthError::Validation(_))
        ));
        assert_eq!(repo.user_count(), 0);
    }
}
