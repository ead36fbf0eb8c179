//! User account entity - the joined credential + profile aggregate

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Role assigned to an account, stored lowercase in the credential row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized role string coming out of storage
#[derive(Debug, Error)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Fully materialized user account: credential fields joined with the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub role: UserRole,
    pub name: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// The seeded default administrator is read-only: its role cannot be
    /// demoted and the account cannot be deleted.
    pub fn is_protected_admin(&self) -> bool {
        self.username == "admin" && self.role == UserRole::Admin
    }
}

/// Input for creating an account; the repository generates the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub role: UserRole,
    pub name: String,
    pub age: Option<i32>,
}

/// Partial update: `None` means "leave the stored value alone"
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UserPatch {
    /// True when the patch touches a credential column
    pub fn touches_credential(&self) -> bool {
        self.password_hash.is_some() || self.role.is_some()
    }

    /// True when the patch touches a profile column
    pub fn touches_profile(&self) -> bool {
        self.name.is_some() || self.age.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.touches_credential() && !self.touches_profile()
    }
}

/// Listing filter. Accepted for interface stability; no criteria yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter {}
