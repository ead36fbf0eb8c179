//! Domain errors - error types for the domain layer
//!
//! Repository failures carry the *first* underlying storage error as the
//! cause; any errors raised while recovering (rollback failing after a write
//! failed) are accumulated in order in `combine` rather than replacing the
//! cause. Readonly-resource violations are operational errors: expected,
//! reportable to the caller, and carrying no storage detail.

use thiserror::Error;

/// An opaque failure reported by the storage engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A repository operation failure: the original cause plus every secondary
/// error collected during cleanup, in the order they occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFailure {
    cause: StorageError,
    combine: Vec<StorageError>,
}

impl RepositoryFailure {
    pub fn new(cause: StorageError) -> Self {
        Self {
            cause,
            combine: Vec::new(),
        }
    }

    /// Fold a secondary error in. The cause is preserved; the new error is
    /// appended after any previously combined ones.
    pub fn combine_with(mut self, error: StorageError) -> Self {
        self.combine.push(error);
        self
    }

    pub fn cause(&self) -> &StorageError {
        &self.cause
    }

    pub fn combined(&self) -> &[StorageError] {
        &self.combine
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error!")]
    Repository(RepositoryFailure),

    #[error("You can not update readonly resource!")]
    UpdateReadonlyResource,

    #[error("You can not delete readonly resource!")]
    DeleteReadonlyResource,
}

impl DomainError {
    /// Wrap a single storage error as a repository failure
    pub fn repository(cause: StorageError) -> Self {
        Self::Repository(RepositoryFailure::new(cause))
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::UpdateReadonlyResource => "UPDATE_READONLY_RESOURCE",
            Self::DeleteReadonlyResource => "DELETE_READONLY_RESOURCE",
        }
    }

    /// Operational errors are expected business outcomes safe to surface to
    /// clients; repository failures are not.
    pub fn is_operational(&self) -> bool {
        match self {
            Self::Repository(_) => false,
            Self::UpdateReadonlyResource | Self::DeleteReadonlyResource => true,
        }
    }

    /// Check if this is a readonly-resource violation
    pub fn is_readonly_violation(&self) -> bool {
        matches!(
            self,
            Self::UpdateReadonlyResource | Self::DeleteReadonlyResource
        )
    }
}
