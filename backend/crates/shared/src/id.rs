//! Common ID Types
//!
//! Type-safe ID wrappers for UUID-keyed entities. Sequence-keyed entities
//! (users, teams, categories) use plain `i64` and are not wrapped here.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type KudosId = Id<markers::Kudos>;
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

// Manual impls: derives would bound T, but only PhantomData<T> is stored
// and marker types stay bare unit structs.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self::from_uuid)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Kudos IDs
    pub struct Kudos;
}

/// Type aliases for common IDs
pub type KudosId = Id<markers::Kudos>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_v4() {
        let id: KudosId = Id::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_from_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        let id: KudosId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_ids_over_bare_markers_clone_and_compare() {
        // markers implement nothing themselves; the id must not care
        struct Bare;

        #[derive(Clone, PartialEq)]
        struct Holder {
            id: Id<Bare>,
        }

        let holder = Holder { id: Id::new() };
        let copy = holder.clone();
        assert!(holder == copy);

        // Copy semantics: reading the id out of a reference is not a move
        let by_ref = &holder;
        let id = by_ref.id;
        assert_eq!(id, holder.id);

        let mut set = std::collections::HashSet::new();
        set.insert(holder.id);
        assert!(set.contains(&copy.id));
    }

    #[test]
    fn test_parse_from_string() {
        let id: KudosId = Id::new();
        let parsed: KudosId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-a-uuid".parse::<KudosId>().is_err());
    }
}
