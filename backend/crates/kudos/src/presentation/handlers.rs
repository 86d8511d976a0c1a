//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use auth::AuthUser;
use kernel::id::KudosId;
use kernel::pagination::Page;
use kernel::response::ApiResponse;
use platform::notify::Notifier;

use crate::application::{
    CreateCategoryUseCase, CreateKudosInput, CreateKudosUseCase, CreateTeamUseCase,
    DeleteCategoryUseCase, DeleteTeamUseCase, GetCategoryUseCase, GetKudosUseCase,
    GetTeamUseCase, ListCategoriesUseCase, ListKudosUseCase, ListTeamsUseCase,
    SearchKudosUseCase, UpdateCategoryUseCase, UpdateTeamUseCase,
};
use crate::domain::repository::{
    CategoryRepository, KudosFilters, KudosRepository, KudosSearchFilters, TeamRepository,
};
use crate::error::{KudosError, KudosResult};
use crate::presentation::dto::{
    CategoryDto, CreateKudosRequest, KudosDto, KudosListResponse, ListKudosQuery, NameRequest,
    SearchKudosQuery, TeamDto,
};

/// Shared state for kudos handlers
#[derive(Clone)]
pub struct KudosAppState<R>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    /// Outbound webhook; absent when no sink is configured
    pub notifier: Option<Arc<Notifier>>,
}

// ============================================================================
// Kudos
// ============================================================================

/// POST /api/kudos
pub async fn create_kudos<R>(
    State(state): State<KudosAppState<R>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateKudosRequest>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateKudosUseCase::new(state.repo.clone(), state.notifier.clone());

    let details = use_case
        .execute(CreateKudosInput {
            recipient_id: req.recipient_id,
            team_id: req.team_id,
            category_id: req.category_id,
            message: req.message,
            created_by: user.0.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message("Kudos created", KudosDto::from(&details)),
    ))
}

/// GET /api/kudos/{id}
pub async fn get_kudos<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<String>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    // A non-UUID id cannot name an existing kudos
    let id: KudosId = id.parse().map_err(|_| KudosError::KudosNotFound)?;

    let use_case = GetKudosUseCase::new(state.repo.clone());
    let details = use_case.execute(id).await?;

    Ok(ApiResponse::ok(KudosDto::from(&details)))
}

/// GET /api/kudos?recipientId&teamId&categoryId&page&limit&sortOrder
pub async fn list_kudos<R>(
    State(state): State<KudosAppState<R>>,
    Query(query): Query<ListKudosQuery>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListKudosUseCase::new(state.repo.clone());

    let page = Page::new(query.page, query.limit);
    let result = use_case
        .execute(KudosFilters {
            recipient_id: query.recipient_id,
            team_id: query.team_id,
            category_id: query.category_id,
            page,
            sort_order: query.sort_order,
        })
        .await?;

    Ok(ApiResponse::ok(KudosListResponse {
        kudos: result.items.iter().map(KudosDto::from).collect(),
        total: result.total,
        page: page.page(),
        limit: page.limit(),
    }))
}

/// GET /api/kudos/search?query&teamId&categoryId&page&limit
pub async fn search_kudos<R>(
    State(state): State<KudosAppState<R>>,
    Query(query): Query<SearchKudosQuery>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = SearchKudosUseCase::new(state.repo.clone());

    let page = Page::new(query.page, query.limit);
    let result = use_case
        .execute(
            &query.query,
            KudosSearchFilters {
                team_id: query.team_id,
                category_id: query.category_id,
                page,
            },
        )
        .await?;

    Ok(ApiResponse::ok(KudosListResponse {
        kudos: result.items.iter().map(KudosDto::from).collect(),
        total: result.total,
        page: page.page(),
        limit: page.limit(),
    }))
}

// ============================================================================
// Teams
// ============================================================================

/// GET /api/teams
pub async fn list_teams<R>(
    State(state): State<KudosAppState<R>>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let teams = ListTeamsUseCase::new(state.repo.clone()).execute().await?;
    let teams: Vec<TeamDto> = teams.iter().map(TeamDto::from).collect();

    Ok(ApiResponse::ok(teams))
}

/// GET /api/teams/{id}
pub async fn get_team<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let team = GetTeamUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(ApiResponse::ok(TeamDto::from(&team)))
}

/// POST /api/teams
pub async fn create_team<R>(
    State(state): State<KudosAppState<R>>,
    Json(req): Json<NameRequest>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let team = CreateTeamUseCase::new(state.repo.clone())
        .execute(&req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message("Team created", TeamDto::from(&team)),
    ))
}

/// PUT /api/teams/{id}
pub async fn update_team<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<NameRequest>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let team = UpdateTeamUseCase::new(state.repo.clone())
        .execute(id, &req.name)
        .await?;

    Ok(ApiResponse::ok_with_message(
        "Team updated",
        TeamDto::from(&team),
    ))
}

/// DELETE /api/teams/{id}
pub async fn delete_team<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let team = DeleteTeamUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(ApiResponse::ok_with_message(
        "Team deleted",
        TeamDto::from(&team),
    ))
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories<R>(
    State(state): State<KudosAppState<R>>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let categories = ListCategoriesUseCase::new(state.repo.clone())
        .execute()
        .await?;
    let categories: Vec<CategoryDto> = categories.iter().map(CategoryDto::from).collect();

    Ok(ApiResponse::ok(categories))
}

/// GET /api/categories/{id}
pub async fn get_category<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let category = GetCategoryUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(ApiResponse::ok(CategoryDto::from(&category)))
}

/// POST /api/categories
pub async fn create_category<R>(
    State(state): State<KudosAppState<R>>,
    Json(req): Json<NameRequest>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let category = CreateCategoryUseCase::new(state.repo.clone())
        .execute(&req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::ok_with_message("Category created", CategoryDto::from(&category)),
    ))
}

/// PUT /api/categories/{id}
pub async fn update_category<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<NameRequest>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let category = UpdateCategoryUseCase::new(state.repo.clone())
        .execute(id, &req.name)
        .await?;

    Ok(ApiResponse::ok_with_message(
        "Category updated",
        CategoryDto::from(&category),
    ))
}

/// DELETE /api/categories/{id}
pub async fn delete_category<R>(
    State(state): State<KudosAppState<R>>,
    Path(id): Path<i64>,
) -> KudosResult<impl IntoResponse>
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let category = DeleteCategoryUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(ApiResponse::ok_with_message(
        "Category deleted",
        CategoryDto::from(&category),
    ))
}
