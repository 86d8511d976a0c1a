//! Auth Middleware
//!
//! Bearer-token authentication plus role gates for protected routes.
//! Gates run before the handler, so a rejected request never touches
//! a repository.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::error::AuthError;
use crate::token::{TokenClaims, TokenService};

/// State for the authenticate middleware
#[derive(Clone)]
pub struct TokenState {
    pub tokens: Arc<TokenService>,
}

/// Verified claims stored in request extensions by [`authenticate`]
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

/// Middleware that requires a valid bearer token. On success the decoded
/// claims are inserted into request extensions as [`AuthUser`].
pub async fn authenticate(
    State(state): State<TokenState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let claims = {
        let Some(token) = extract_bearer(req.headers()) else {
            return Err(AuthError::MissingToken.into_response());
        };

        match state.tokens.verify(token) {
            Ok(claims) => claims,
            Err(e) => return Err(e.into_response()),
        }
    };

    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

/// Middleware that requires the ADMIN role. Layer after [`authenticate`].
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    require_role(req, next, |user| user.0.role.is_admin(), "Admin access required").await
}

/// Middleware that requires ADMIN or TECH_LEAD. Layer after
/// [`authenticate`].
pub async fn require_tech_lead(req: Request<Body>, next: Next) -> Result<Response, Response> {
    require_role(
        req,
        next,
        |user| user.0.role.can_give_kudos(),
        "Tech lead or admin access required",
    )
    .await
}

async fn require_role(
    req: Request<Body>,
    next: Next,
    allowed: fn(&AuthUser) -> bool,
    message: &'static str,
) -> Result<Response, Response> {
    let Some(user) = req.extensions().get::<AuthUser>() else {
        // authenticate was not layered; treat as unauthenticated
        return Err(AuthError::MissingToken.into_response());
    };

    if !allowed(user) {
        return Err(AuthError::Forbidden(message).into_response());
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Router, middleware as axum_middleware};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{
        email::Email, person_name::PersonName, user_role::UserRole,
    };
    use platform::password::ClearTextPassword;

    fn user_with_role(role: UserRole) -> User {
        let mut user = User::new(
            PersonName::new("Test", "User").unwrap(),
            Email::new("test@example.com").unwrap(),
            ClearTextPassword::new("long-enough-pw".to_string())
                .unwrap()
                .hash()
                .unwrap(),
            None,
        );
        user.id = 1;
        user.role = role;
        user
    }

    fn gated_router(tokens: Arc<TokenService>, hits: &'static AtomicUsize) -> Router {
        let token_state = TokenState { tokens };

        Router::new()
            .route(
                "/admin-only",
                get(move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::OK
                }),
            )
            .route_layer(axum_middleware::from_fn(require_admin))
            .route_layer(axum_middleware::from_fn_with_state(
                token_state,
                authenticate,
            ))
    }

    async fn hit(router: Router, bearer: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri("/admin-only");
        if let Some(token) = bearer {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let response = router
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        static HITS: AtomicUsize = AtomicUsize::new(0);
        let tokens = Arc::new(TokenService::with_default_ttl("middleware-test-secret-01"));

        let status = hit(gated_router(tokens, &HITS), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(HITS.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_team_member_is_rejected_before_handler_runs() {
        static HITS: AtomicUsize = AtomicUsize::new(0);
        let tokens = Arc::new(TokenService::with_default_ttl("middleware-test-secret-02"));
        let token = tokens.issue(&user_with_role(UserRole::TeamMember)).unwrap();

        let status = hit(gated_router(tokens, &HITS), Some(&token)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(HITS.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_admin_passes_the_gate() {
        static HITS: AtomicUsize = AtomicUsize::new(0);
        let tokens = Arc::new(TokenService::with_default_ttl("middleware-test-secret-03"));
        let token = tokens.issue(&user_with_role(UserRole::Admin)).unwrap();

        let status = hit(gated_router(tokens, &HITS), Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(HITS.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_tech_lead_gate_accepts_both_elevated_roles() {
        let tokens = Arc::new(TokenService::with_default_ttl("middleware-test-secret-04"));
        let token_state = TokenState {
            tokens: tokens.clone(),
        };

        let router = Router::new()
            .route("/give-kudos", get(|| async { StatusCode::OK }))
            .route_layer(axum_middleware::from_fn(require_tech_lead))
            .route_layer(axum_middleware::from_fn_with_state(
                token_state,
                authenticate,
            ));

        for (role, expected) in [
            (UserRole::Admin, StatusCode::OK),
            (UserRole::TechLead, StatusCode::OK),
            (UserRole::TeamMember, StatusCode::FORBIDDEN),
        ] {
            let token = tokens.issue(&user_with_role(role)).unwrap();
            let response = router
                .clone()
                .oneshot(
                    axum::http::Request::builder()
                        .uri("/give-kudos")
                        .header("Authorization", format!("Bearer {}", token))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{role}");
        }
    }
}
