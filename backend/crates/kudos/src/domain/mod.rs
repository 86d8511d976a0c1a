//! Domain Layer
//!
//! Contains the kudos, team, and category entities, value objects, and
//! repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::category::Category;
pub use entity::kudos::{Kudos, KudosDetails};
pub use entity::team::Team;
pub use repository::{
    CategoryRepository, KudosFilters, KudosRepository, KudosSearchFilters, TeamRepository,
};
pub use value_object::entity_name::EntityName;
