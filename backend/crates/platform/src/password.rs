//! Password Hashing and Verification
//!
//! Argon2id hashing over PHC-formatted strings. Credentials are never
//! compared in plaintext; verification parses the stored PHC string and
//! lets Argon2 do the constant-time comparison.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted at signup.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password, validated against the signup policy.
///
/// Does not implement `Clone`; Debug output is redacted.
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a raw password.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = raw.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // Argon2id with the crate's OWASP-recommended defaults
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Hashed password in PHC string format, safe to store.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string loaded from storage.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a clear text password against this hash.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_rejects_short_and_empty() {
        assert!(matches!(
            ClearTextPassword::new("short".to_string()),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            ClearTextPassword::new("   ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("x".repeat(200)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password));

        let wrong = ClearTextPassword::new("incorrect horse".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("correct horse battery".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password));

        assert!(HashedPassword::from_phc_string("not-a-phc-string").is_err());
    }
}
