//! Repository Traits
//!
//! Interfaces for kudos persistence and the team/category reference
//! stores. Implementations live in the infrastructure layer. Every read
//! implicitly excludes soft-deleted rows.

use kernel::id::KudosId;
use kernel::pagination::{Page, Paginated, SortOrder};

use crate::domain::entity::category::Category;
use crate::domain::entity::kudos::{Kudos, KudosDetails};
use crate::domain::entity::team::Team;
use crate::domain::value_object::entity_name::EntityName;
use crate::error::KudosResult;

/// Filters for the kudos listing.
#[derive(Debug, Clone, Default)]
pub struct KudosFilters {
    pub recipient_id: Option<i64>,
    pub team_id: Option<i64>,
    pub category_id: Option<i64>,
    pub page: Page,
    /// Direction for created_at ordering; default newest first
    pub sort_order: Option<SortOrder>,
}

/// Filters for the kudos text search.
#[derive(Debug, Clone, Default)]
pub struct KudosSearchFilters {
    pub team_id: Option<i64>,
    pub category_id: Option<i64>,
    pub page: Page,
}

/// Kudos repository trait
#[trait_variant::make(KudosRepository: Send)]
pub trait LocalKudosRepository {
    /// Insert a new kudos
    async fn create(&self, kudos: &Kudos) -> KudosResult<()>;

    /// Fetch one kudos with display names resolved. Absent when the
    /// kudos, its recipient, or its creator is soft-deleted.
    async fn find_by_id(&self, id: KudosId) -> KudosResult<Option<KudosDetails>>;

    /// Paginated listing, newest first unless overridden. The total is
    /// computed by an independent count query over the same predicate.
    async fn find_all(&self, filters: &KudosFilters) -> KudosResult<Paginated<KudosDetails>>;

    /// Prefix match on recipient first name, last name, or message.
    /// The returned total is the capped row count of this page, not a
    /// true match count.
    async fn search(
        &self,
        query: &str,
        filters: &KudosSearchFilters,
    ) -> KudosResult<Paginated<KudosDetails>>;
}

/// Team repository trait
#[trait_variant::make(TeamRepository: Send)]
pub trait LocalTeamRepository {
    /// All live teams, name-ordered
    async fn find_all_teams(&self) -> KudosResult<Vec<Team>>;

    async fn find_team_by_id(&self, id: i64) -> KudosResult<Option<Team>>;

    /// Insert; duplicate name surfaces as a conflict
    async fn create_team(&self, team: &Team) -> KudosResult<Team>;

    /// Rename; returns the refreshed entity, or None if the id does not
    /// resolve
    async fn update_team(&self, id: i64, name: &EntityName) -> KudosResult<Option<Team>>;

    /// Set the soft-delete marker; returns the now-deleted entity, or
    /// None if the id does not resolve
    async fn soft_delete_team(&self, id: i64) -> KudosResult<Option<Team>>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// All live categories, name-ordered
    async fn find_all_categories(&self) -> KudosResult<Vec<Category>>;

    async fn find_category_by_id(&self, id: i64) -> KudosResult<Option<Category>>;

    /// Insert; duplicate name surfaces as a conflict
    async fn create_category(&self, category: &Category) -> KudosResult<Category>;

    /// Rename; returns the refreshed entity, or None if the id does not
    /// resolve
    async fn update_category(
        &self,
        id: i64,
        name: &EntityName,
    ) -> KudosResult<Option<Category>>;

    /// Set the soft-delete marker; returns the now-deleted entity, or
    /// None if the id does not resolve
    async fn soft_delete_category(&self, id: i64) -> KudosResult<Option<Category>>;
}
