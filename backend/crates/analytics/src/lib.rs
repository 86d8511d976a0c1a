//! Analytics Backend Module
//!
//! Read-only aggregation over the kudos data set:
//! - Leaderboards: top teams and top categories by kudos received within
//!   a rolling window, fetched concurrently
//! - Summary counters with a deliberately asymmetric window (only the
//!   kudos total is windowed)
//!
//! Windows are computed in Rust as cutoff timestamps and bound into the
//! queries, so the mapping is unit-testable.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::period::Period;
pub use error::{AnalyticsError, AnalyticsResult};
pub use infra::postgres::PgAnalyticsRepository;
pub use presentation::router::analytics_router;
