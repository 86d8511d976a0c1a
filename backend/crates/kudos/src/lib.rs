//! Kudos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Kudos, team, and category entities, value objects,
//!   repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Kudos creation (TECH_LEAD/ADMIN), with display names resolved at
//!   read time via joins rather than stored copies
//! - Filtered and paginated listings, newest first
//! - Prefix search over recipient names and messages
//! - Team and category reference stores with admin-gated management
//! - Best-effort webhook notification on creation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{KudosError, KudosResult};
pub use infra::postgres::PgKudosRepository;
pub use presentation::router::{categories_router, kudos_router, teams_router};
