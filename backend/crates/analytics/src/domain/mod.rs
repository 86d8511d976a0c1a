//! Domain Layer

pub mod period;
pub mod repository;

// Re-exports
pub use period::Period;
pub use repository::{AnalyticsRepository, Stats, TopEntry};
