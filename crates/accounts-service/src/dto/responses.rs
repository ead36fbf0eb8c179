//! Response DTOs for API endpoints
//!
//! Password hashes and salts never leave the service layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use accounts_core::UserRole;

/// Single user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing response with the total count
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub count: u64,
    pub data: Vec<UserResponse>,
}

/// Change-count response for updates
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateCountResponse {
    pub updated: u64,
}

/// Change-count response for deletes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteCountResponse {
    pub deleted: u64,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        let status = if database { "ready" } else { "degraded" };
        Self { status, database }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.database
    }
}
