//! User handlers
//!
//! Endpoints for account listing, lookup, creation, partial update,
//! and soft deletion.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use accounts_service::{
    CreateUserRequest, DeleteCountResponse, UpdateCountResponse, UpdateUserRequest,
    UserListResponse, UserResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
}

/// List all users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<UserListResponse>> {
    let response = state.user_service().list_users().await?;
    Ok(Json(response))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let response = state.user_service().get_user(user_id).await?;
    Ok(Json(response))
}

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let response = state.user_service().create_user(request).await?;
    Ok(Created(Json(response)))
}

/// Partially update a user
///
/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UpdateCountResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let updated = state.user_service().update_user(user_id, request).await?;
    Ok(Json(UpdateCountResponse { updated }))
}

/// Soft-delete a user
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteCountResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let deleted = state.user_service().delete_user(user_id).await?;
    Ok(Json(DeleteCountResponse { deleted }))
}
