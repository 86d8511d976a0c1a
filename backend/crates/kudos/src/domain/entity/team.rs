//! Team Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::entity_name::EntityName;

/// Team entity. ADMIN-managed reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Assigned by storage on insert; 0 until then
    pub id: i64,
    /// Unique among non-deleted teams
    pub name: EntityName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Team {
    pub fn new(name: EntityName) -> Self {
        let now = Utc::now();

        Self {
            id: 0,
            name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
