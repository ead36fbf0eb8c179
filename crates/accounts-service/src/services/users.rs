//! User service
//!
//! Owns everything the repository deliberately does not: password hashing on
//! create, re-hashing with the account's existing salt on a password change,
//! and translating an absent account into NotFound for point reads. Update
//! and delete keep the repository's idempotent change-count convention.

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use accounts_common::auth::{generate_salt, hash_with_salt};
use accounts_core::{NewUser, UserFilter, UserPatch, UserRepository, UserRole};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserResponse};

use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new UserService
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// List all accounts
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<UserListResponse> {
        let (accounts, count) = self.repo.get_all(UserFilter::default()).await?;
        let data = accounts.iter().map(UserResponse::from).collect();

        Ok(UserListResponse { count, data })
    }

    /// Get a single account; absence becomes NotFound here
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let account = self
            .repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&account))
    }

    /// Create an account with a freshly salted password hash
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let salt = generate_salt();
        let password_hash = hash_with_salt(&request.password, &salt)?;

        let user = NewUser {
            username: request.username,
            password_hash,
            salt,
            role: request.role.unwrap_or(UserRole::User),
            name: request.name,
            age: request.age,
        };

        let account = self.repo.create(user).await?;
        info!(user_id = %account.id, "User created");

        Ok(UserResponse::from(&account))
    }

    /// Apply a partial update; a password change re-uses the stored salt
    #[instrument(skip(self, request))]
    pub async fn update_user(&self, user_id: Uuid, request: UpdateUserRequest) -> ServiceResult<u64> {
        let mut patch = UserPatch {
            password_hash: None,
            role: request.role,
            name: request.name,
            age: request.age,
        };

        if let Some(password) = request.password {
            let Some(account) = self.repo.get_by_id(user_id).await? else {
                // The repository would report 0 for the rest of the patch too
                return Ok(0);
            };
            patch.password_hash = Some(hash_with_salt(&password, &account.salt)?);
        }

        let changed = self.repo.update(user_id, patch).await?;
        if changed > 0 {
            info!(user_id = %user_id, "User updated");
        }

        Ok(changed)
    }

    /// Soft-delete an account
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Uuid) -> ServiceResult<u64> {
        let changed = self.repo.delete(user_id).await?;
        if changed > 0 {
            info!(user_id = %user_id, "User deleted");
        }

        Ok(changed)
    }
}
