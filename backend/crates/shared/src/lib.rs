//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! backend module:
//! - Common error types and result aliases
//! - Typed ID wrappers
//! - Pagination primitives
//! - The uniform JSON response envelope
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod pagination;
#[cfg(feature = "axum")]
pub mod response;
