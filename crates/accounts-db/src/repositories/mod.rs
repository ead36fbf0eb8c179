//! Repository implementations

mod atomic;
mod user;

pub(crate) use atomic::AtomicUnit;
pub use user::StoreUserRepository;
