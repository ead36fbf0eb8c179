//! Service layer

mod error;
mod users;

pub use error::{ServiceError, ServiceResult};
pub use users::UserService;
