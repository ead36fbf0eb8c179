//! Transactional user repository
//!
//! An account is two rows in two tables behind one id. Every write touches
//! both (or at least may), so writes run through an `AtomicUnit`: both rows
//! land or neither does. Reads run directly against the engine outside any
//! transaction.
//!
//! Update and delete are idempotent: a missing target yields a change count
//! of 0, not an error. The seeded `admin`/admin account is read-only for
//! role demotion and deletion; the guard checks the *stored* row and runs
//! before any connection is taken.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use accounts_core::{
    DomainError, IdGenerator, NewUser, RepoResult, UserAccount, UserFilter, UserPatch,
    UserRepository, UserRole,
};

use crate::engine::StorageEngine;
use crate::mappers::assemble_account;
use crate::models::{CredentialModel, ProfileModel};

use super::AtomicUnit;

/// Store-backed implementation of UserRepository
#[derive(Clone)]
pub struct StoreUserRepository {
    engine: Arc<dyn StorageEngine>,
    ids: Arc<dyn IdGenerator>,
}

impl StoreUserRepository {
    /// Create a new StoreUserRepository
    pub fn new(engine: Arc<dyn StorageEngine>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { engine, ids }
    }

    /// Look up both halves of an account concurrently
    async fn find_pair(
        &self,
        id: Uuid,
    ) -> RepoResult<(Option<CredentialModel>, Option<ProfileModel>)> {
        tokio::try_join!(self.engine.find_credential(id), self.engine.find_profile(id))
            .map_err(DomainError::repository)
    }
}

/// The stored row is read-only when it is the seeded administrator
fn is_protected_credential(credential: &CredentialModel) -> bool {
    credential.username == "admin" && credential.role == UserRole::Admin.as_str()
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    #[instrument(skip(self))]
    async fn get_all(&self, _filter: UserFilter) -> RepoResult<(Vec<UserAccount>, u64)> {
        let rows = self
            .engine
            .find_all_user_rows()
            .await
            .map_err(DomainError::repository)?;

        let accounts = rows
            .into_iter()
            .map(UserAccount::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DomainError::repository)?;

        let count = accounts.len() as u64;
        Ok((accounts, count))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<UserAccount>> {
        let row = self
            .engine
            .find_user_row(id)
            .await
            .map_err(DomainError::repository)?;

        match row {
            Some(row) => {
                let account = UserAccount::try_from(row).map_err(DomainError::repository)?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: NewUser) -> RepoResult<UserAccount> {
        let id = self.ids.generate();
        let credential = CredentialModel::from_new(id, &user);
        let profile = ProfileModel::from_new(id, &user);

        let mut unit = AtomicUnit::open(self.engine.as_ref()).await?;

        if let Err(e) = unit.handle().save_credential(&credential).await {
            return Err(unit.abort(e).await);
        }
        if let Err(e) = unit.handle().save_profile(&profile).await {
            return Err(unit.abort(e).await);
        }

        unit.commit().await?;

        assemble_account(&credential, &profile).map_err(DomainError::repository)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: UserPatch) -> RepoResult<u64> {
        let (credential, profile) = self.find_pair(id).await?;
        let (Some(mut credential), Some(mut profile)) = (credential, profile) else {
            return Ok(0);
        };

        if is_protected_credential(&credential)
            && patch.role.is_some_and(|role| role != UserRole::Admin)
        {
            return Err(DomainError::UpdateReadonlyResource);
        }

        let mut touch_credential = false;
        let mut touch_profile = false;

        if let Some(password_hash) = patch.password_hash {
            credential.password_hash = password_hash;
            touch_credential = true;
        }
        if let Some(role) = patch.role {
            credential.role = role.as_str().to_string();
            touch_credential = true;
        }
        if let Some(name) = patch.name {
            profile.name = name;
            touch_profile = true;
        }
        if let Some(age) = patch.age {
            profile.age = Some(age);
            touch_profile = true;
        }

        let mut unit = AtomicUnit::open(self.engine.as_ref()).await?;
        let mut changed = 0;

        if touch_credential {
            credential.updated_at = Utc::now();
            if let Err(e) = unit.handle().save_credential(&credential).await {
                return Err(unit.abort(e).await);
            }
            changed = 1;
        }
        if touch_profile {
            profile.updated_at = Utc::now();
            if let Err(e) = unit.handle().save_profile(&profile).await {
                return Err(unit.abort(e).await);
            }
            changed = 1;
        }

        unit.commit().await?;

        Ok(changed)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<u64> {
        let (credential, profile) = self.find_pair(id).await?;
        let (Some(credential), Some(_profile)) = (credential, profile) else {
            return Ok(0);
        };

        if is_protected_credential(&credential) {
            return Err(DomainError::DeleteReadonlyResource);
        }

        let mut unit = AtomicUnit::open(self.engine.as_ref()).await?;

        if let Err(e) = unit.handle().soft_delete_credential(id).await {
            return Err(unit.abort(e).await);
        }
        if let Err(e) = unit.handle().soft_delete_profile(id).await {
            return Err(unit.abort(e).await);
        }

        unit.commit().await?;

        Ok(1)
    }
}
