//! Row -> entity mappers

mod user;

pub use user::assemble_account;
