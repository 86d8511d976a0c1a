//! Token Service
//!
//! Issues and verifies stateless HS256 bearer tokens. Validity is purely
//! cryptographic + expiry based; nothing is stored server-side. Each login
//! mints a random session id claim so the same user can hold independent
//! tokens per browser or device.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Claim set carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub team_id: Option<i64>,
    /// Random per-login id; lets a future blacklist invalidate a single
    /// device without touching the user's other tokens
    pub session_id: String,
    pub iat: i64,
    pub exp: i64,
}

/// Stateless JWT issuer/verifier.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Default token lifetime: 24 hours.
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, Duration::hours(Self::DEFAULT_TTL_HOURS))
    }

    /// Issue a signed token for the user. Pure function of secret,
    /// claims, and clock.
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.issue_with_expiry(user, Utc::now() + self.ttl)
    }

    fn issue_with_expiry(&self, user: &User, expires_at: DateTime<Utc>) -> AuthResult<String> {
        let claims = TokenClaims {
            id: user.id,
            first_name: user.name.first().to_string(),
            last_name: user.name.last().to_string(),
            full_name: user.full_name(),
            email: user.email.as_str().to_string(),
            role: user.role,
            team_id: user.team_id,
            session_id: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Verify signature and expiry. Bad signature, malformed token, and
    /// expiry all collapse into the same error; the client learns nothing
    /// beyond "invalid".
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // seconds of clock-skew tolerance

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::TokenInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, person_name::PersonName};
    use platform::password::ClearTextPassword;

    fn test_user() -> User {
        let mut user = User::new(
            PersonName::new("Grace", "Hopper").unwrap(),
            Email::new("grace@example.com").unwrap(),
            ClearTextPassword::new("nanoseconds".to_string())
                .unwrap()
                .hash()
                .unwrap(),
            Some(7),
        );
        user.id = 42;
        user
    }

    fn service() -> TokenService {
        TokenService::with_default_ttl("test-secret-test-secret-test-secret")
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let tokens = service();
        let user = test_user();

        let token = tokens.issue(&user).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.first_name, "Grace");
        assert_eq!(claims.last_name, "Hopper");
        assert_eq!(claims.full_name, "Grace Hopper");
        assert_eq!(claims.email, "grace@example.com");
        assert_eq!(claims.role, UserRole::TeamMember);
        assert_eq!(claims.team_id, Some(7));
        assert!(!claims.session_id.is_empty());
    }

    #[test]
    fn test_each_login_gets_a_fresh_session_id() {
        let tokens = service();
        let user = test_user();

        let a = tokens.verify(&tokens.issue(&user).unwrap()).unwrap();
        let b = tokens.verify(&tokens.issue(&user).unwrap()).unwrap();

        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let tokens = service();
        let user = test_user();

        // well past the 30s leeway
        let token = tokens
            .issue_with_expiry(&user, Utc::now() - Duration::hours(1))
            .unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let tokens = service();
        let token = tokens.issue(&test_user()).unwrap();

        // flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(matches!(
            tokens.verify(&tampered),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = service().issue(&test_user()).unwrap();
        let other = TokenService::with_default_ttl("another-secret-another-secret!!");

        assert!(matches!(other.verify(&token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(matches!(
            service().verify("not.a.jwt"),
            Err(AuthError::TokenInvalid)
        ));
    }
}
