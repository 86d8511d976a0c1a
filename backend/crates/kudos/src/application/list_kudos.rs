//! List Kudos Use Case
//!
//! Filtered, paginated kudos feed. Newest first unless the caller
//! overrides the direction.

use std::sync::Arc;

use kernel::pagination::Paginated;

use crate::domain::entity::kudos::KudosDetails;
use crate::domain::repository::{KudosFilters, KudosRepository};
use crate::error::KudosResult;

/// List kudos use case
pub struct ListKudosUseCase<K>
where
    K: KudosRepository,
{
    kudos_repo: Arc<K>,
}

impl<K> ListKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(kudos_repo: Arc<K>) -> Self {
        Self { kudos_repo }
    }

    pub async fn execute(&self, filters: KudosFilters) -> KudosResult<Paginated<KudosDetails>> {
        self.kudos_repo.find_all(&filters).await
    }
}
