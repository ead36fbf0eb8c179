//! Storage engine abstraction
//!
//! The repository talks to storage through these two traits. `StorageEngine`
//! is the long-lived side: it hands out transactional handles and runs the
//! read queries that never join a transaction. `StorageHandle` is one checked
//! -out connection; every write goes through a handle between `begin` and
//! `commit`/`rollback`, and `release` consumes the handle so it cannot be
//! reused after it returns to the pool.

mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use accounts_core::StorageError;

use crate::models::{CredentialModel, ProfileModel, UserRowModel};

pub use postgres::PgStorageEngine;

/// Result type for storage engine operations
pub type EngineResult<T> = Result<T, StorageError>;

/// One checked-out connection with transactional writes
#[async_trait]
pub trait StorageHandle: Send {
    /// Open a transaction on this connection
    async fn begin(&mut self) -> EngineResult<()>;

    /// Insert or update a credential row
    async fn save_credential(&mut self, record: &CredentialModel) -> EngineResult<()>;

    /// Insert or update a profile row
    async fn save_profile(&mut self, record: &ProfileModel) -> EngineResult<()>;

    /// Mark a live credential row as deleted
    async fn soft_delete_credential(&mut self, id: Uuid) -> EngineResult<()>;

    /// Mark a live profile row as deleted
    async fn soft_delete_profile(&mut self, id: Uuid) -> EngineResult<()>;

    /// Commit the open transaction
    async fn commit(&mut self) -> EngineResult<()>;

    /// Roll back the open transaction
    async fn rollback(&mut self) -> EngineResult<()>;

    /// Return the connection. Consumes the handle and never fails.
    async fn release(self: Box<Self>);
}

/// Storage backend: hands out handles and runs non-transactional reads
#[async_trait]
pub trait StorageEngine: Send + Sync {
    /// Check out a connection for transactional work
    async fn connect(&self) -> EngineResult<Box<dyn StorageHandle>>;

    /// Fetch a live credential row by id
    async fn find_credential(&self, id: Uuid) -> EngineResult<Option<CredentialModel>>;

    /// Fetch a live profile row by id
    async fn find_profile(&self, id: Uuid) -> EngineResult<Option<ProfileModel>>;

    /// Fetch a joined account row by id
    async fn find_user_row(&self, id: Uuid) -> EngineResult<Option<UserRowModel>>;

    /// Fetch all live account rows, newest first
    async fn find_all_user_rows(&self) -> EngineResult<Vec<UserRowModel>>;
}
