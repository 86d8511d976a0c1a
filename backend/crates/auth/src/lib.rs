//! Auth (Authentication & Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases and application configuration
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, middleware, routers
//!
//! ## Features
//! - Signup (always creates a TEAM_MEMBER) and login with email + password
//! - Stateless JWT bearer tokens (HS256, per-login session id claim)
//! - Role-gated middleware chain (authenticate, then role check)
//! - Admin user management: listing, role assignment, soft delete
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (never compared in plaintext)
//! - Token validity is purely cryptographic + expiry; logout is a
//!   client-side no-op
//! - Soft-deleted users are invisible to every lookup

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{
    AuthUser, TokenState, authenticate, require_admin, require_tech_lead,
};
pub use presentation::router::{auth_router, users_router};
pub use token::{TokenClaims, TokenService};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
