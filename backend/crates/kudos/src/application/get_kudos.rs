//! Get Kudos Use Case

use std::sync::Arc;

use kernel::id::KudosId;

use crate::domain::entity::kudos::KudosDetails;
use crate::domain::repository::KudosRepository;
use crate::error::{KudosError, KudosResult};

/// Get kudos use case
pub struct GetKudosUseCase<K>
where
    K: KudosRepository,
{
    kudos_repo: Arc<K>,
}

impl<K> GetKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(kudos_repo: Arc<K>) -> Self {
        Self { kudos_repo }
    }

    pub async fn execute(&self, id: KudosId) -> KudosResult<KudosDetails> {
        self.kudos_repo
            .find_by_id(id)
            .await?
            .ok_or(KudosError::KudosNotFound)
    }
}
