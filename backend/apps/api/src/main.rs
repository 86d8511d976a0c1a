//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use analytics::PgAnalyticsRepository;
use auth::{AuthConfig, PgUserRepository};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use kudos::PgKudosRepository;
use platform::notify::Notifier;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,kudos=info,analytics=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let mut auth_config = AuthConfig::new(jwt_secret);
    if let Ok(hours) = env::var("JWT_EXPIRY_HOURS") {
        auth_config = auth_config.with_ttl_hours(hours.parse()?);
    }
    let tokens = Arc::new(auth_config.token_service());

    // Optional webhook for kudos announcements
    let notifier = match env::var("KUDOS_WEBHOOK_URL") {
        Ok(url) if !url.trim().is_empty() => {
            tracing::info!("Kudos webhook notifications enabled");
            Some(Arc::new(Notifier::new(url)))
        }
        _ => {
            tracing::info!("KUDOS_WEBHOOK_URL not set, webhook notifications disabled");
            None
        }
    };

    // Repositories
    let user_repo = PgUserRepository::new(pool.clone());
    let kudos_repo = PgKudosRepository::new(pool.clone());
    let analytics_repo = PgAnalyticsRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::auth_router(user_repo.clone(), tokens.clone()))
        .nest("/api/users", auth::users_router(user_repo, tokens.clone()))
        .nest(
            "/api/kudos",
            kudos::kudos_router(kudos_repo.clone(), tokens.clone(), notifier),
        )
        .nest(
            "/api/teams",
            kudos::teams_router(kudos_repo.clone(), tokens.clone()),
        )
        .nest(
            "/api/categories",
            kudos::categories_router(kudos_repo, tokens.clone()),
        )
        .nest(
            "/api/analytics",
            analytics::analytics_router(analytics_repo, tokens),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Liveness probe. Deliberately does not touch the database.
async fn health() -> &'static str {
    "OK"
}
