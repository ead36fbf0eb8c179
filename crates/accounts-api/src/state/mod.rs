//! Application state
//!
//! Holds the shared state for the Axum application including
//! the user service, JWT service, and configuration.

use std::sync::Arc;

use accounts_common::{AppConfig, JwtService};
use accounts_db::PgPool;
use accounts_service::UserService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// User service handling all account operations
    user_service: Arc<UserService>,
    /// JWT service for bearer-token validation
    jwt_service: Arc<JwtService>,
    /// Database pool, kept for readiness checks
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        user_service: UserService,
        jwt_service: JwtService,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            jwt_service: Arc::new(jwt_service),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the user service
    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("user_service", &"UserService")
            .field("config", &"AppConfig")
            .finish_non_exhaustive()
    }
}
