//! # accounts-db
//!
//! Database layer implementing the repository port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Row -> entity mappers
//! - The storage-engine abstraction (connect / begin / save / soft-delete /
//!   commit / rollback / release) with its PostgreSQL implementation
//! - The transactional user repository coordinating credential + profile
//!   writes as one atomic unit
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use accounts_core::UuidGenerator;
//! use accounts_db::engine::PgStorageEngine;
//! use accounts_db::pool::{create_pool, DatabaseConfig};
//! use accounts_db::repositories::StoreUserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let engine = Arc::new(PgStorageEngine::new(pool));
//!     let user_repo = StoreUserRepository::new(engine, Arc::new(UuidGenerator));
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use engine::{PgStorageEngine, StorageEngine, StorageHandle};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::StoreUserRepository;
