//! Team Management Use Cases
//!
//! Listing is public; create/rename/delete are ADMIN-gated at the
//! router. One small use case per operation.

use std::sync::Arc;

use crate::domain::entity::team::Team;
use crate::domain::repository::TeamRepository;
use crate::domain::value_object::entity_name::EntityName;
use crate::error::{KudosError, KudosResult};

/// List teams use case
pub struct ListTeamsUseCase<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> ListTeamsUseCase<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self) -> KudosResult<Vec<Team>> {
        self.team_repo.find_all_teams().await
    }
}

/// Get team use case
pub struct GetTeamUseCase<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> GetTeamUseCase<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, id: i64) -> KudosResult<Team> {
        self.team_repo
            .find_team_by_id(id)
            .await?
            .ok_or(KudosError::TeamNotFound)
    }
}

/// Create team use case
pub struct CreateTeamUseCase<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> CreateTeamUseCase<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, name: &str) -> KudosResult<Team> {
        let name = EntityName::new(name).map_err(|e| KudosError::Validation(e.to_string()))?;
        let team = self.team_repo.create_team(&Team::new(name)).await?;

        tracing::info!(team_id = team.id, name = %team.name, "Team created");

        Ok(team)
    }
}

/// Update team use case
pub struct UpdateTeamUseCase<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> UpdateTeamUseCase<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, id: i64, name: &str) -> KudosResult<Team> {
        let name = EntityName::new(name).map_err(|e| KudosError::Validation(e.to_string()))?;

        self.team_repo
            .update_team(id, &name)
            .await?
            .ok_or(KudosError::TeamNotFound)
    }
}

/// Delete team use case
pub struct DeleteTeamUseCase<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> DeleteTeamUseCase<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, id: i64) -> KudosResult<Team> {
        let team = self
            .team_repo
            .soft_delete_team(id)
            .await?
            .ok_or(KudosError::TeamNotFound)?;

        tracing::info!(team_id = team.id, "Team soft-deleted");

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::test_support::InMemoryReferenceRepository;

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = Arc::new(InMemoryReferenceRepository::new());
        let create = CreateTeamUseCase::new(repo.clone());

        create.execute("Platform").await.unwrap();

        assert!(matches!(
            create.execute("Platform").await,
            Err(KudosError::NameTaken("team"))
        ));
    }

    #[tokio::test]
    async fn test_deleted_team_leaves_listing() {
        let repo = Arc::new(InMemoryReferenceRepository::new());
        let team = CreateTeamUseCase::new(repo.clone())
            .execute("Platform")
            .await
            .unwrap();

        DeleteTeamUseCase::new(repo.clone())
            .execute(team.id)
            .await
            .unwrap();

        let teams = ListTeamsUseCase::new(repo.clone()).execute().await.unwrap();
        assert!(teams.is_empty());

        assert!(matches!(
            GetTeamUseCase::new(repo).execute(team.id).await,
            Err(KudosError::TeamNotFound)
        ));
    }

    #[tokio::test]
    async fn test_rename_and_blank_name_rejection() {
        let repo = Arc::new(InMemoryReferenceRepository::new());
        let team = CreateTeamUseCase::new(repo.clone())
            .execute("Platform")
            .await
            .unwrap();

        let update = UpdateTeamUseCase::new(repo.clone());
        let renamed = update.execute(team.id, "Infra").await.unwrap();
        assert_eq!(renamed.name.as_str(), "Infra");

        assert!(matches!(
            update.execute(team.id, "   ").await,
            Err(KudosError::Validation(_))
        ));
    }
}
