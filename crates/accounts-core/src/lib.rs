//! # accounts-core
//!
//! Domain layer containing entities, the repository error taxonomy, and the
//! repository port traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod id;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{NewUser, RoleParseError, UserAccount, UserFilter, UserPatch, UserRole};
pub use error::{DomainError, RepositoryFailure, StorageError};
pub use id::{IdGenerator, UuidGenerator};
pub use traits::{RepoResult, UserRepository};
