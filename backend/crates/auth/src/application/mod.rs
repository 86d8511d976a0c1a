//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_user;
pub mod list_users;
pub mod login;
pub mod search_users;
pub mod sign_up;
pub mod update_user_role;

// Re-exports
pub use config::AuthConfig;
pub use delete_user::DeleteUserUseCase;
pub use list_users::ListUsersUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use search_users::SearchUsersUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use update_user_role::{UpdateUserRoleInput, UpdateUserRoleUseCase};
