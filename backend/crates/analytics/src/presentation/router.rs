//! Analytics Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::{TokenService, TokenState, authenticate};

use crate::domain::repository::AnalyticsRepository;
use crate::infra::postgres::PgAnalyticsRepository;
use crate::presentation::handlers::{self, AnalyticsAppState};

/// Create the analytics router with PostgreSQL repository
pub fn analytics_router(repo: PgAnalyticsRepository, tokens: Arc<TokenService>) -> Router {
    analytics_router_generic(repo, tokens)
}

/// Create a generic analytics router. Both routes require a bearer token.
pub fn analytics_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let state = AnalyticsAppState {
        repo: Arc::new(repo),
    };
    let token_state = TokenState { tokens };

    Router::new()
        .route("/", get(handlers::get_analytics::<R>))
        .route("/stats", get(handlers::get_stats::<R>))
        .route_layer(middleware::from_fn_with_state(token_state, authenticate))
        .with_state(state)
}
