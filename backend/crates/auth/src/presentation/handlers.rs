//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::pagination::Page;
use kernel::response::ApiResponse;

use crate::application::{
    DeleteUserUseCase, ListUsersUseCase, LoginInput, LoginUseCase, SearchUsersUseCase,
    SignUpInput, SignUpUseCase, UpdateUserRoleInput, UpdateUserRoleUseCase,
};
use crate::domain::repository::{UserFilters, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    DeleteUserRequest, ListUsersQuery, LoginRequest, LoginResponse, SearchUsersQuery,
    SignUpRequest, SignUpResponse, UpdateRoleRequest, UserDto, UserListResponse,
};
use crate::presentation::middleware::AuthUser;
use crate::token::TokenService;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let output = use_case
        .execute(SignUpInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            team_id: req.team_id,
        })
        .await?;

    // Duplicate email is a non-error signal: 200 with userExists
    let (status, message) = if output.user_exists {
        (StatusCode::OK, "User already exists")
    } else {
        (StatusCode::CREATED, "User registered successfully")
    };

    let body = ApiResponse::ok_with_message(
        message,
        SignUpResponse {
            user_exists: output.user_exists,
            user: output.user.as_ref().map(UserDto::from),
        },
    );

    Ok((status, body))
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(ApiResponse::ok_with_message(
        "Login successful",
        LoginResponse {
            token: output.token,
            user: UserDto::from(&output.user),
        },
    ))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy. Kept as an
/// endpoint so clients have a uniform call to make.
pub async fn logout() -> impl IntoResponse {
    ApiResponse::success("Logged out")
}

/// GET /api/auth/verify-token
pub async fn verify_token(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
    ApiResponse::ok(user.0)
}

// ============================================================================
// User search (recipient picker)
// ============================================================================

/// GET /api/auth/users/search?searchText=
pub async fn search_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<SearchUsersQuery>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SearchUsersUseCase::new(state.repo.clone());

    let users = use_case.execute(&query.search_text).await?;
    let users: Vec<UserDto> = users.iter().map(UserDto::from).collect();

    Ok(ApiResponse::ok(users))
}

// ============================================================================
// Admin user management
// ============================================================================

/// GET /api/users?role&teamId&page&limit&sortOrder
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<ListUsersQuery>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let page = Page::new(query.page, query.limit);
    let result = use_case
        .execute(UserFilters {
            role: query.role,
            team_id: query.team_id,
            page,
            sort_order: query.sort_order.unwrap_or_default(),
        })
        .await?;

    Ok(ApiResponse::ok(UserListResponse {
        users: result.items.iter().map(UserDto::from).collect(),
        total: result.total,
        page: page.page(),
        limit: page.limit(),
    }))
}

/// PUT /api/users/updateRole
pub async fn update_user_role<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<UpdateRoleRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserRoleUseCase::new(state.repo.clone());

    let user = use_case
        .execute(UpdateUserRoleInput {
            user_id: req.user_id,
            role: req.role,
            team_id: req.team_id,
        })
        .await?;

    Ok(ApiResponse::ok_with_message(
        "User role updated",
        UserDto::from(&user),
    ))
}

/// DELETE /api/users
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<DeleteUserRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());

    let user = use_case.execute(req.user_id).await?;

    Ok(ApiResponse::ok_with_message(
        "User deleted",
        UserDto::from(&user),
    ))
}
