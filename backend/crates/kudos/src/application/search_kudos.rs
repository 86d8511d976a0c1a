//! Search Kudos Use Case
//!
//! Free-text prefix search over recipient names and messages.

use std::sync::Arc;

use kernel::pagination::Paginated;

use crate::domain::entity::kudos::KudosDetails;
use crate::domain::repository::{KudosRepository, KudosSearchFilters};
use crate::error::{KudosError, KudosResult};

/// Search kudos use case
pub struct SearchKudosUseCase<K>
where
    K: KudosRepository,
{
    kudos_repo: Arc<K>,
}

impl<K> SearchKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(kudos_repo: Arc<K>) -> Self {
        Self { kudos_repo }
    }

    pub async fn execute(
        &self,
        query: &str,
        filters: KudosSearchFilters,
    ) -> KudosResult<Paginated<KudosDetails>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(KudosError::Validation(
                "Search query is required".to_string(),
            ));
        }

        self.kudos_repo.search(query, &filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::kudos::Kudos;
    use crate::domain::repository::KudosRepository as _;
    use crate::domain::repository::test_support::{InMemoryKudosRepository, NameDirectory};
    use kernel::pagination::Page;

    async fn seeded_repo() -> Arc<InMemoryKudosRepository> {
        let mut names = NameDirectory::default();
        names
            .users
            .insert(1, ("Grace".to_string(), "Hopper".to_string()));
        names
            .users
            .insert(2, ("Alan".to_string(), "Turing".to_string()));
        let repo = Arc::new(InMemoryKudosRepository::new(names));

        for (recipient, message) in [
            (1, "Graceful incident handling"),
            (2, "Tremendous code review"),
            (1, "Helped onboard the new hire"),
        ] {
            let kudos = Kudos::new(Some(recipient), 1, 1, message, 2).unwrap();
            repo.create(&kudos).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_matches_recipient_name_or_message_prefix() {
        let repo = seeded_repo().await;
        let use_case = SearchKudosUseCase::new(repo);

        // "gra" hits Grace (recipient) and "Graceful..." (message)
        let page = use_case
            .execute("gra", KudosSearchFilters::default())
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.items.iter().all(|k| k.recipient_id == 1));
    }

    #[tokio::test]
    async fn test_total_equals_returned_row_count() {
        let repo = seeded_repo().await;
        let use_case = SearchKudosUseCase::new(repo);

        let page = use_case
            .execute(
                "gra",
                KudosSearchFilters {
                    page: Page::new(Some(1), Some(1)),
                    ..KudosSearchFilters::default()
                },
            )
            .await
            .unwrap();

        // capped count, not the true match count of 2
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let repo = Arc::new(InMemoryKudosRepository::new(NameDirectory::default()));
        let use_case = SearchKudosUseCase::new(repo);

        assert!(matches!(
            use_case.execute("  ", KudosSearchFilters::default()).await,
            Err(KudosError::Validation(_))
        ));
    }
}
