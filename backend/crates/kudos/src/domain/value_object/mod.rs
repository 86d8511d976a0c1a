//! Value Objects

pub mod entity_name;

pub use entity_name::EntityName;
