//! Person Name Value Object
//!
//! First and last name, each trimmed and at least two characters.

use std::fmt;

use thiserror::Error;

const MIN_NAME_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonNameError {
    #[error("First name must be at least {MIN_NAME_LENGTH} characters")]
    FirstNameTooShort,

    #[error("Last name must be at least {MIN_NAME_LENGTH} characters")]
    LastNameTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Result<Self, PersonNameError> {
        let first = first.into().trim().to_string();
        let last = last.into().trim().to_string();

        if first.chars().count() < MIN_NAME_LENGTH {
            return Err(PersonNameError::FirstNameTooShort);
        }
        if last.chars().count() < MIN_NAME_LENGTH {
            return Err(PersonNameError::LastNameTooShort);
        }

        Ok(Self { first, last })
    }

    /// Rehydrate from storage without re-validation.
    pub fn from_db(first: String, last: String) -> Self {
        Self { first, last }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
