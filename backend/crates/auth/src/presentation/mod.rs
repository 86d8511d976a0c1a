//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthUser, TokenState, authenticate, require_admin, require_tech_lead};
pub use router::{auth_router, auth_router_generic, users_router, users_router_generic};
