//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use responses::{
    DeleteCountResponse, HealthResponse, ReadinessResponse, UpdateCountResponse, UserListResponse,
    UserResponse,
};
