//! Credential and profile database models
//!
//! An account is split across two tables sharing the same primary key:
//! `credentials` holds the login material and role, `profiles` the public
//! fields. `UserRowModel` is the joined shape the read queries return.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use accounts_core::NewUser;

/// Database model for the credentials table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CredentialModel {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CredentialModel {
    /// Build the credential row for a new account
    pub fn from_new(id: Uuid, user: &NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            salt: user.salt.clone(),
            role: user.role.as_str().to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Database model for the profiles table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ProfileModel {
    /// Build the profile row for a new account
    pub fn from_new(id: Uuid, user: &NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: user.name.clone(),
            age: user.age,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Joined credentials + profiles row; timestamps come from the profile
#[derive(Debug, Clone, FromRow)]
pub struct UserRowModel {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub role: String,
    pub name: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
