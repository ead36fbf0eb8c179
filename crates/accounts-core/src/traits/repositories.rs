//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewUser, UserAccount, UserFilter, UserPatch};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all live accounts, newest first, with the total count
    async fn get_all(&self, filter: UserFilter) -> RepoResult<(Vec<UserAccount>, u64)>;

    /// Find an account by id; absence is not an error at this layer
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<UserAccount>>;

    /// Create the credential and profile rows as one atomic unit and return
    /// the stored account
    async fn create(&self, user: NewUser) -> RepoResult<UserAccount>;

    /// Apply a partial update; returns the number of accounts changed
    /// (0 when the target does not exist, 1 otherwise)
    async fn update(&self, id: Uuid, patch: UserPatch) -> RepoResult<u64>;

    /// Soft-delete an account; returns the number of accounts changed
    /// (0 when the target does not exist, 1 otherwise)
    async fn delete(&self, id: Uuid) -> RepoResult<u64>;
}
