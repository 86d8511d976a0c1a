//! Auth and User Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    TokenState, authenticate, require_admin, require_tech_lead,
};
use crate::token::TokenService;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    auth_router_generic(repo, tokens)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
    };
    let token_state = TokenState { tokens };

    let public = Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>));

    let authenticated = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/verify-token", get(handlers::verify_token))
        .route_layer(middleware::from_fn_with_state(
            token_state.clone(),
            authenticate,
        ));

    // Recipient picker for kudos; hidden from plain team members
    let elevated = Router::new()
        .route("/users/search", get(handlers::search_users::<R>))
        .route_layer(middleware::from_fn(require_tech_lead))
        .route_layer(middleware::from_fn_with_state(token_state, authenticate));

    public
        .merge(authenticated)
        .merge(elevated)
        .with_state(state)
}

/// Create the admin user-management router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository, tokens: Arc<TokenService>) -> Router {
    users_router_generic(repo, tokens)
}

/// Create a generic user-management router. Every route is admin-only.
pub fn users_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
    };
    let token_state = TokenState { tokens };

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).delete(handlers::delete_user::<R>),
        )
        .route("/updateRole", put(handlers::update_user_role::<R>))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(token_state, authenticate))
        .with_state(state)
}
