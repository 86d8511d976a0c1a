//! Application Layer

pub mod get_analytics;
pub mod get_stats;

// Re-exports
pub use get_analytics::{DEFAULT_TOP_LIMIT, GetAnalyticsOutput, GetAnalyticsUseCase, MAX_TOP_LIMIT};
pub use get_stats::GetStatsUseCase;
