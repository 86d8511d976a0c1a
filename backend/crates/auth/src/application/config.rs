//! Application Configuration
//!
//! Configuration for the Auth application layer.

use chrono::Duration;

use crate::token::TokenService;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub jwt_secret: String,
    /// Token lifetime in hours (24 by default)
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: TokenService::DEFAULT_TTL_HOURS,
        }
    }

    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    /// Build the token service this config describes
    pub fn token_service(&self) -> TokenService {
        TokenService::new(&self.jwt_secret, Duration::hours(self.token_ttl_hours))
    }
}
