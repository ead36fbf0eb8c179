//! Domain entities

mod user;

pub use user::{NewUser, RoleParseError, UserAccount, UserFilter, UserPatch, UserRole};
