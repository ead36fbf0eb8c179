//! Repository port traits

mod repositories;

pub use repositories::{RepoResult, UserRepository};
