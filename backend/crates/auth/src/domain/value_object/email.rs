//! Email Value Object
//!
//! Lowercased, trimmed, shape-checked email address. The check is
//! deliberately loose (local@domain.tld); deliverability is not our
//! problem, uniqueness is the store's.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Empty,

    #[error("Email address is not valid")]
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, EmailError> {
        let normalized = raw.into().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(EmailError::Malformed);
        };

        if local.is_empty()
            || domain.is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || normalized.contains(char::is_whitespace)
        {
            return Err(EmailError::Malformed);
        }

        Ok(Self(normalized))
    }

    /// Rehydrate from storage without re-validation.
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_and_normalizes() {
        let email = Email::new("  Jane.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["no-at-sign", "@example.com", "user@", "user@nodot", "a b@x.io", "user@.com"] {
            assert_eq!(Email::new(bad), Err(EmailError::Malformed), "{bad}");
        }
    }
}
