//! # accounts-service
//!
//! Application layer: the user service orchestrating password handling and
//! repository calls, plus the request/response DTOs with validation.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateUserRequest, DeleteCountResponse, HealthResponse, ReadinessResponse, UpdateCountResponse,
    UpdateUserRequest, UserListResponse, UserResponse,
};
pub use services::{ServiceError, ServiceResult, UserService};
