//! User row <-> entity mapping
//!
//! The account's id and timestamps come from the profile row; the login
//! fields come from the credential row.

use accounts_core::{StorageError, UserAccount, UserRole};

use crate::models::{CredentialModel, ProfileModel, UserRowModel};

/// Convert a joined row into a UserAccount
impl TryFrom<UserRowModel> for UserAccount {
    type Error = StorageError;

    fn try_from(row: UserRowModel) -> Result<Self, Self::Error> {
        let role: UserRole = row
            .role
            .parse()
            .map_err(|e: accounts_core::RoleParseError| StorageError::new(e.to_string()))?;

        Ok(UserAccount {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            salt: row.salt,
            role,
            name: row.name,
            age: row.age,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Assemble a UserAccount from a credential/profile pair written in the same
/// unit, without re-reading the row
pub fn assemble_account(
    credential: &CredentialModel,
    profile: &ProfileModel,
) -> Result<UserAccount, StorageError> {
    let role: UserRole = credential
        .role
        .parse()
        .map_err(|e: accounts_core::RoleParseError| StorageError::new(e.to_string()))?;

    Ok(UserAccount {
        id: profile.id,
        username: credential.username.clone(),
        password_hash: credential.password_hash.clone(),
        salt: credential.salt.clone(),
        role,
        name: profile.name.clone(),
        age: profile.age,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use accounts_core::NewUser;
    use chrono::Utc;
    use uuid::Uuid;

    fn new_user() -> NewUser {
        NewUser {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            salt: "salt".to_string(),
            role: UserRole::User,
            name: "Alice".to_string(),
            age: Some(25),
        }
    }

    #[test]
    fn test_assemble_account_uses_profile_timestamps() {
        let id = Uuid::new_v4();
        let credential = CredentialModel::from_new(id, &new_user());
        let mut profile = ProfileModel::from_new(id, &new_user());
        profile.created_at = Utc::now();

        let account = assemble_account(&credential, &profile).unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.username, "alice");
        assert_eq!(account.role, UserRole::User);
        assert_eq!(account.created_at, profile.created_at);
    }

    #[test]
    fn test_row_with_unknown_role_is_rejected() {
        let row = UserRowModel {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            salt: "salt".to_string(),
            role: "superuser".to_string(),
            name: "Alice".to_string(),
            age: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(UserAccount::try_from(row).is_err());
    }
}
