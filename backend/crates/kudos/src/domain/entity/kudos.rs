//! Kudos Entity
//!
//! A single piece of recognition: someone credits a recipient (and a
//! team) within a category. Immutable after creation except soft delete.

use chrono::{DateTime, Utc};
use kernel::id::KudosId;
use thiserror::Error;

/// Minimum message length after trimming.
pub const MIN_MESSAGE_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KudosValidationError {
    #[error("Recipient is required")]
    RecipientRequired,

    #[error("Message must be at least {MIN_MESSAGE_LENGTH} characters")]
    MessageTooShort,
}

/// Kudos entity
#[derive(Debug, Clone, PartialEq)]
pub struct Kudos {
    pub id: KudosId,
    pub recipient_id: i64,
    /// The team being credited; independent of the recipient's own team
    pub team_id: i64,
    pub category_id: i64,
    pub message: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Kudos {
    /// Create a kudos with a fresh server-generated id. Validation lives
    /// here; use cases never re-check.
    pub fn new(
        recipient_id: Option<i64>,
        team_id: i64,
        category_id: i64,
        message: impl Into<String>,
        created_by: i64,
    ) -> Result<Self, KudosValidationError> {
        let recipient_id = recipient_id.ok_or(KudosValidationError::RecipientRequired)?;

        let message = message.into().trim().to_string();
        if message.chars().count() < MIN_MESSAGE_LENGTH {
            return Err(KudosValidationError::MessageTooShort);
        }

        let now = Utc::now();

        Ok(Self {
            id: KudosId::new(),
            recipient_id,
            team_id,
            category_id,
            message,
            created_by,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }
}

/// Read model for kudos listings: the entity plus display names resolved
/// at query time. Team and category names are nullable because those rows
/// may have been soft-deleted since the kudos was given.
#[derive(Debug, Clone)]
pub struct KudosDetails {
    pub id: KudosId,
    pub recipient_id: i64,
    pub recipient_name: String,
    pub team_id: i64,
    pub team_name: Option<String>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub message: String,
    pub created_by: i64,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_kudos() {
        let kudos = Kudos::new(Some(2), 1, 3, "  Great launch work!  ", 9).unwrap();

        assert_eq!(kudos.recipient_id, 2);
        assert_eq!(kudos.message, "Great launch work!");
        assert!(kudos.deleted_at.is_none());
    }

    #[test]
    fn test_missing_recipient_is_rejected() {
        assert_eq!(
            Kudos::new(None, 1, 3, "Great launch work!", 9),
            Err(KudosValidationError::RecipientRequired),
        );
    }

    #[test]
    fn test_short_message_is_rejected() {
        // four chars after trimming
        assert_eq!(
            Kudos::new(Some(2), 1, 3, "  nice  ", 9),
            Err(KudosValidationError::MessageTooShort),
        );
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Kudos::new(Some(2), 1, 3, "Great launch work!", 9).unwrap();
        let b = Kudos::new(Some(2), 1, 3, "Great launch work!", 9).unwrap();
        assert_ne!(a.id, b.id);
    }
}
