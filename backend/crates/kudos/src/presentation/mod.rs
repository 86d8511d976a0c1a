//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::KudosAppState;
pub use router::{
    categories_router, categories_router_generic, kudos_router, kudos_router_generic,
    teams_router, teams_router_generic,
};
