//! PostgreSQL storage engine
//!
//! Transactions are driven explicitly (`BEGIN`/`COMMIT`/`ROLLBACK`) on a
//! checked-out pool connection so the coordinator controls their lifecycle.
//! Saves are upserts: the same statement covers the insert on create and the
//! full-row write-back on update.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::instrument;
use uuid::Uuid;

use accounts_core::StorageError;

use crate::models::{CredentialModel, ProfileModel, UserRowModel};

use super::{EngineResult, StorageEngine, StorageHandle};

fn map_db_error(e: sqlx::Error) -> StorageError {
    StorageError::new(e.to_string())
}

/// PostgreSQL implementation of StorageEngine
#[derive(Clone)]
pub struct PgStorageEngine {
    pool: PgPool,
}

impl PgStorageEngine {
    /// Create a new PgStorageEngine
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageEngine for PgStorageEngine {
    async fn connect(&self) -> EngineResult<Box<dyn StorageHandle>> {
        let conn = self.pool.acquire().await.map_err(map_db_error)?;
        Ok(Box::new(PgStorageHandle { conn }))
    }

    #[instrument(skip(self))]
    async fn find_credential(&self, id: Uuid) -> EngineResult<Option<CredentialModel>> {
        sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT id, username, password_hash, salt, role, created_at, updated_at, deleted_at
            FROM credentials
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_profile(&self, id: Uuid) -> EngineResult<Option<ProfileModel>> {
        sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, name, age, created_at, updated_at, deleted_at
            FROM profiles
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_user_row(&self, id: Uuid) -> EngineResult<Option<UserRowModel>> {
        sqlx::query_as::<_, UserRowModel>(
            r"
            SELECT p.id, c.username, c.password_hash, c.salt, c.role,
                   p.name, p.age, p.created_at, p.updated_at
            FROM profiles p
            INNER JOIN credentials c ON c.id = p.id
            WHERE p.id = $1 AND p.deleted_at IS NULL AND c.deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_all_user_rows(&self) -> EngineResult<Vec<UserRowModel>> {
        // The profile's created_at is the account's canonical timestamp
        sqlx::query_as::<_, UserRowModel>(
            r"
            SELECT p.id, c.username, c.password_hash, c.salt, c.role,
                   p.name, p.age, p.created_at, p.updated_at
            FROM profiles p
            INNER JOIN credentials c ON c.id = p.id
            WHERE p.deleted_at IS NULL AND c.deleted_at IS NULL
            ORDER BY p.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

/// A checked-out PostgreSQL connection
pub struct PgStorageHandle {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl StorageHandle for PgStorageHandle {
    async fn begin(&mut self) -> EngineResult<()> {
        sqlx::query("BEGIN")
            .execute(self.conn.as_mut())
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    async fn save_credential(&mut self, record: &CredentialModel) -> EngineResult<()> {
        sqlx::query(
            r"
            INSERT INTO credentials (id, username, password_hash, salt, role, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                password_hash = EXCLUDED.password_hash,
                salt = EXCLUDED.salt,
                role = EXCLUDED.role,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(record.id)
        .bind(&record.username)
        .bind(&record.password_hash)
        .bind(&record.salt)
        .bind(&record.role)
        .bind(record.created_at)
        .bind(record.updated_at)
        .bind(record.deleted_at)
        .execute(self.conn.as_mut())
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn save_profile(&mut self, record: &ProfileModel) -> EngineResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, name, age, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                age = EXCLUDED.age,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(record.age)
        .bind(record.created_at)
        .bind(record.updated_at)
        .bind(record.deleted_at)
        .execute(self.conn.as_mut())
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn soft_delete_credential(&mut self, id: Uuid) -> EngineResult<()> {
        sqlx::query(
            r"
            UPDATE credentials
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(self.conn.as_mut())
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn soft_delete_profile(&mut self, id: Uuid) -> EngineResult<()> {
        sqlx::query(
            r"
            UPDATE profiles
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(self.conn.as_mut())
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn commit(&mut self) -> EngineResult<()> {
        sqlx::query("COMMIT")
            .execute(self.conn.as_mut())
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    async fn rollback(&mut self) -> EngineResult<()> {
        sqlx::query("ROLLBACK")
            .execute(self.conn.as_mut())
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    async fn release(self: Box<Self>) {
        // Dropping the connection returns it to the pool
        drop(self);
    }
}
