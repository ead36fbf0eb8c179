//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use accounts_common::{AppConfig, AppError, JwtService};
use accounts_core::UuidGenerator;
use accounts_db::{create_pool, run_migrations, PgStorageEngine, StoreUserRepository};
use accounts_service::UserService;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors_config = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &cors_config, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = accounts_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await.map_err(AppError::internal)?;
    info!("PostgreSQL connection established");

    // Run pending migrations
    run_migrations(&pool).await.map_err(AppError::internal)?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);

    // Wire the repository behind its storage engine
    let engine = Arc::new(PgStorageEngine::new(pool.clone()));
    let ids = Arc::new(UuidGenerator);
    let user_repo = Arc::new(StoreUserRepository::new(engine, ids));

    let user_service = UserService::new(user_repo);

    Ok(AppState::new(user_service, jwt_service, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &address).await
}
