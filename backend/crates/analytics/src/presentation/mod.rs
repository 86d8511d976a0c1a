//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AnalyticsAppState;
pub use router::{analytics_router, analytics_router_generic};
