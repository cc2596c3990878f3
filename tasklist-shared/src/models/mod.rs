pub mod auth;
pub mod errors;
pub mod todo;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserRole};
pub use errors::ErrorResponse;
pub use todo::{ListId, NewList, NewTask, Task, TaskId, TaskStatus, TodoList};
