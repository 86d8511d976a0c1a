//! Application Layer
//!
//! Use cases for kudos, teams, and categories.

pub mod create_kudos;
pub mod get_kudos;
pub mod list_kudos;
pub mod manage_categories;
pub mod manage_teams;
pub mod search_kudos;

// Re-exports
pub use create_kudos::{CreateKudosInput, CreateKudosUseCase};
pub use get_kudos::GetKudosUseCase;
pub use list_kudos::ListKudosUseCase;
pub use manage_categories::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    UpdateCategoryUseCase,
};
pub use manage_teams::{
    CreateTeamUseCase, DeleteTeamUseCase, GetTeamUseCase, ListTeamsUseCase, UpdateTeamUseCase,
};
pub use search_kudos::SearchKudosUseCase;
