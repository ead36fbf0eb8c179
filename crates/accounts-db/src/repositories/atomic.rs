//! Atomic write unit
//!
//! Owns one storage handle for the duration of a multi-row write. The
//! lifecycle is strict:
//!
//! - connect fails: the error is returned as-is, nothing to release
//! - begin fails: the handle is released, no rollback (no transaction opened)
//! - a write or the commit fails: roll back exactly once, then release; a
//!   rollback failure is combined into the returned error without displacing
//!   the original cause
//! - success: commit, then release
//!
//! `abort` and `commit` consume the unit, so the handle is released exactly
//! once on every path.

use accounts_core::{DomainError, RepositoryFailure, StorageError};

use crate::engine::{StorageEngine, StorageHandle};

pub(crate) struct AtomicUnit {
    handle: Box<dyn StorageHandle>,
}

impl AtomicUnit {
    /// Check out a handle and open a transaction on it
    pub(crate) async fn open(engine: &dyn StorageEngine) -> Result<Self, DomainError> {
        let mut handle = match engine.connect().await {
            Ok(handle) => handle,
            Err(e) => return Err(DomainError::repository(e)),
        };

        if let Err(e) = handle.begin().await {
            handle.release().await;
            return Err(DomainError::repository(e));
        }

        Ok(Self { handle })
    }

    /// The handle for issuing writes inside the open transaction
    pub(crate) fn handle(&mut self) -> &mut dyn StorageHandle {
        self.handle.as_mut()
    }

    /// Abandon the unit after a failed write: roll back, release, and return
    /// the failure to propagate
    pub(crate) async fn abort(self, cause: StorageError) -> DomainError {
        let mut failure = RepositoryFailure::new(cause);
        let mut handle = self.handle;

        if let Err(rollback_error) = handle.rollback().await {
            failure = failure.combine_with(rollback_error);
        }
        handle.release().await;

        DomainError::Repository(failure)
    }

    /// Commit the unit. A commit failure takes the abort path.
    pub(crate) async fn commit(self) -> Result<(), DomainError> {
        let mut handle = self.handle;

        match handle.commit().await {
            Ok(()) => {
                handle.release().await;
                Ok(())
            }
            Err(e) => {
                let mut failure = RepositoryFailure::new(e);
                if let Err(rollback_error) = handle.rollback().await {
                    failure = failure.combine_with(rollback_error);
                }
                handle.release().await;
                Err(DomainError::Repository(failure))
            }
        }
    }
}
