//! Entity Name Value Object
//!
//! Display name shared by teams and categories. Trimmed, non-empty,
//! bounded length. Uniqueness among live rows is the store's concern.

use std::fmt;

use thiserror::Error;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityNameError {
    #[error("Name is required")]
    Empty,

    #[error("Name must be at most {MAX_NAME_LENGTH} characters")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(raw: impl Into<String>) -> Result<Self, EntityNameError> {
        let trimmed = raw.into().trim().to_string();

        if trimmed.is_empty() {
            return Err(EntityNameError::Empty);
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(EntityNameError::TooLong);
        }

        Ok(Self(trimmed))
    }

    /// Rehydrate from storage without re-validation.
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
