//! Create Kudos Use Case
//!
//! Persists a kudos, then fires a best-effort webhook notification.
//! The notification runs in a spawned task; its failure is logged and
//! never affects the response.

use std::sync::Arc;

use platform::notify::Notifier;

use crate::domain::entity::kudos::{Kudos, KudosDetails};
use crate::domain::repository::KudosRepository;
use crate::error::{KudosError, KudosResult};

/// Create kudos input
pub struct CreateKudosInput {
    pub recipient_id: Option<i64>,
    pub team_id: i64,
    pub category_id: i64,
    pub message: String,
    pub created_by: i64,
}

/// Create kudos use case
pub struct CreateKudosUseCase<K>
where
    K: KudosRepository,
{
    kudos_repo: Arc<K>,
    notifier: Option<Arc<Notifier>>,
}

impl<K> CreateKudosUseCase<K>
where
    K: KudosRepository,
{
    pub fn new(kudos_repo: Arc<K>, notifier: Option<Arc<Notifier>>) -> Self {
        Self {
            kudos_repo,
            notifier,
        }
    }

    pub async fn execute(&self, input: CreateKudosInput) -> KudosResult<KudosDetails> {
        let kudos = Kudos::new(
            input.recipient_id,
            input.team_id,
            input.category_id,
            input.message,
            input.created_by,
        )
        .map_err(|e| KudosError::Validation(e.to_string()))?;

        self.kudos_repo.create(&kudos).await?;

        let details = self
            .kudos_repo
            .find_by_id(kudos.id)
            .await?
            .ok_or_else(|| KudosError::Internal("Created kudos not readable".to_string()))?;

        tracing::info!(
            kudos_id = %details.id,
            recipient_id = details.recipient_id,
            created_by = details.created_by,
            "Kudos created"
        );

        if let Some(notifier) = &self.notifier {
            let notifier = notifier.clone();
            let message = format!(
                "🎉 {} received kudos from {}: {}",
                details.recipient_name, details.created_by_name, details.message
            );
            tokio::spawn(async move {
                if let Err(e) = notifier.send(&message).await {
                    tracing::warn!(error = %e, "Kudos webhook notification failed");
                }
            });
        }

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::test_support::{InMemoryKudosRepository, NameDirectory};

    fn repo() -> Arc<InMemoryKudosRepository> {
        let mut names = NameDirectory::default();
        names
            .users
            .insert(2, ("Grace".to_string(), "Hopper".to_string()));
        names
            .users
            .insert(9, ("Ada".to_string(), "Lovelace".to_string()));
        names.teams.insert(1, "Platform".to_string());
        names.categories.insert(3, "Teamwork".to_string());
        Arc::new(InMemoryKudosRepository::new(names))
    }

    #[tokio::test]
    async fn test_create_resolves_display_names() {
        let repo = repo();
        let use_case = CreateKudosUseCase::new(repo.clone(), None);

        let details = use_case
            .execute(CreateKudosInput {
                recipient_id: Some(2),
                team_id: 1,
                category_id: 3,
                message: "Shipped the migration flawlessly".to_string(),
                created_by: 9,
            })
            .await
            .unwrap();

        assert_eq!(details.recipient_name, "Grace Hopper");
        assert_eq!(details.created_by_name, "Ada Lovelace");
        assert_eq!(details.team_name.as_deref(), Some("Platform"));
        assert_eq!(details.category_name.as_deref(), Some("Teamwork"));
        assert_eq!(repo.kudos_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_writes_nothing() {
        let repo = repo();
        let use_case = CreateKudosUseCase::new(repo.clone(), None);

        let missing_recipient = use_case
            .execute(CreateKudosInput {
                recipient_id: None,
                team_id: 1,
                category_id: 3,
                message: "Shipped the migration flawlessly".to_string(),
                created_by: 9,
            })
            .await;
        let short_message = use_case
            .execute(CreateKudosInput {
                recipient_id: Some(2),
                team_id: 1,
                category_id: 3,
                message: "gg".to_string(),
                created_by: 9,
            })
            .await;

        assert!(matches!(missing_recipient, Err(KudosError::Validation(_))));
        assert!(matches!(short_message, Err(KudosError::Validation(_))));
        assert_eq!(repo.kudos_count(), 0);
    }
}
