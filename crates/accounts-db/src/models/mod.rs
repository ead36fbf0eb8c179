//! Database models

mod user;

pub use user::{CredentialModel, ProfileModel, UserRowModel};
