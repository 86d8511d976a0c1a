//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Bearer token header extraction
//! - Fire-and-forget outbound webhook notification

pub mod bearer;
pub mod notify;
pub mod password;
