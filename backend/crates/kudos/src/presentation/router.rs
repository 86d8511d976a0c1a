//! Kudos, Team, and Category Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{TokenService, TokenState, authenticate, require_admin, require_tech_lead};
use platform::notify::Notifier;

use crate::domain::repository::{CategoryRepository, KudosRepository, TeamRepository};
use crate::infra::postgres::PgKudosRepository;
use crate::presentation::handlers::{self, KudosAppState};

/// Create the kudos router with PostgreSQL repository
pub fn kudos_router(
    repo: PgKudosRepository,
    tokens: Arc<TokenService>,
    notifier: Option<Arc<Notifier>>,
) -> Router {
    kudos_router_generic(repo, tokens, notifier)
}

/// Create a generic kudos router. Every route requires a bearer token;
/// creation additionally requires TECH_LEAD or ADMIN.
pub fn kudos_router_generic<R>(
    repo: R,
    tokens: Arc<TokenService>,
    notifier: Option<Arc<Notifier>>,
) -> Router
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = KudosAppState {
        repo: Arc::new(repo),
        notifier,
    };
    let token_state = TokenState { tokens };

    let create = Router::new()
        .route("/", post(handlers::create_kudos::<R>))
        .route_layer(middleware::from_fn(require_tech_lead));

    let read = Router::new()
        .route("/", get(handlers::list_kudos::<R>))
        .route("/search", get(handlers::search_kudos::<R>))
        .route("/{id}", get(handlers::get_kudos::<R>));

    create
        .merge(read)
        .route_layer(middleware::from_fn_with_state(token_state, authenticate))
        .with_state(state)
}

/// Create the teams router with PostgreSQL repository
pub fn teams_router(repo: PgKudosRepository, tokens: Arc<TokenService>) -> Router {
    teams_router_generic(repo, tokens)
}

/// Create a generic teams router. Reads are public; mutations are
/// admin-only.
pub fn teams_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = KudosAppState {
        repo: Arc::new(repo),
        notifier: None,
    };
    let token_state = TokenState { tokens };

    let public = Router::new()
        .route("/", get(handlers::list_teams::<R>))
        .route("/{id}", get(handlers::get_team::<R>));

    let admin = Router::new()
        .route("/", post(handlers::create_team::<R>))
        .route(
            "/{id}",
            put(handlers::update_team::<R>).delete(handlers::delete_team::<R>),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(token_state, authenticate));

    public.merge(admin).with_state(state)
}

/// Create the categories router with PostgreSQL repository
pub fn categories_router(repo: PgKudosRepository, tokens: Arc<TokenService>) -> Router {
    categories_router_generic(repo, tokens)
}

/// Create a generic categories router. Reads are public; mutations are
/// admin-only.
pub fn categories_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: KudosRepository + TeamRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = KudosAppState {
        repo: Arc::new(repo),
        notifier: None,
    };
    let token_state = TokenState { tokens };

    let public = Router::new()
        .route("/", get(handlers::list_categories::<R>))
        .route("/{id}", get(handlers::get_category::<R>));

    let admin = Router::new()
        .route("/", post(handlers::create_category::<R>))
        .route(
            "/{id}",
            put(handlers::update_category::<R>).delete(handlers::delete_category::<R>),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(token_state, authenticate));

    public.merge(admin).with_state(state)
}
