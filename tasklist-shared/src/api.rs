//! # REST surface
//!
//! The endpoint table of the todo backend and the [`TodoApi`] trait every
//! transport implements. Controllers only ever talk to the backend through
//! this trait, which keeps them testable without a browser.

use crate::errors::{ClientError, ClientResult};
use crate::models::{
    ErrorResponse, ListId, LoginRequest, LoginResponse, NewList, NewTask, RegisterRequest, Task,
    TaskId, TodoList,
};
use async_trait::async_trait;
use std::fmt;

/// HTTP verbs used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case verb, as logged.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every backend operation the client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /auth/register`
    Register,
    /// `POST /auth/login`
    Login,
    /// `GET /lists`
    Lists,
    /// `POST /lists`
    CreateList,
    /// `PUT /lists/{id}`
    UpdateList(ListId),
    /// `DELETE /lists/{id}`
    DeleteList(ListId),
    /// `GET /tasks/list/{id}`
    TasksForList(ListId),
    /// `POST /tasks?listId={id}`
    CreateTask(ListId),
    /// `PUT /tasks/{id}`
    UpdateTask(TaskId),
    /// `DELETE /tasks/{id}`
    DeleteTask(TaskId),
}

impl Endpoint {
    /// Verb the backend expects for this operation.
    #[must_use]
    pub fn method(self) -> HttpMethod {
        match self {
            Self::Lists | Self::TasksForList(_) => HttpMethod::Get,
            Self::Register | Self::Login | Self::CreateList | Self::CreateTask(_) => {
                HttpMethod::Post
            }
            Self::UpdateList(_) | Self::UpdateTask(_) => HttpMethod::Put,
            Self::DeleteList(_) | Self::DeleteTask(_) => HttpMethod::Delete,
        }
    }

    /// Path relative to the API base URL, query string included.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Register => "/auth/register".to_string(),
            Self::Login => "/auth/login".to_string(),
            Self::Lists | Self::CreateList => "/lists".to_string(),
            Self::UpdateList(id) | Self::DeleteList(id) => format!("/lists/{id}"),
            Self::TasksForList(id) => format!("/tasks/list/{id}"),
            Self::CreateTask(list_id) => format!("/tasks?listId={list_id}"),
            Self::UpdateTask(id) | Self::DeleteTask(id) => format!("/tasks/{id}"),
        }
    }

    /// Whether the bearer token must accompany the request.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Register | Self::Login)
    }

    /// Message used when a failed response carries no message of its own.
    #[must_use]
    pub fn fallback_error(self) -> String {
        match self {
            Self::Login => "Login failed".to_string(),
            Self::Register => "Registration failed.".to_string(),
            other => format!("Request to {} failed.", other.path()),
        }
    }

    /// Build the error for a non-success response to this endpoint.
    #[must_use]
    pub fn error_for(self, status: u16, body: &str) -> ClientError {
        let message = ErrorResponse::from_body(body).message_or(self.fallback_error());
        ClientError::request(status, message)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Operations offered by the todo backend.
///
/// Futures are not required to be `Send`: the browser transport runs on the
/// single wasm thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Create an account.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the backend rejects the account or is unreachable.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the credentials are rejected or the backend is unreachable.
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// Fetch every list of the current user.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn lists(&self) -> ClientResult<Vec<TodoList>>;

    /// Create a list.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn create_list(&self, list: &NewList) -> ClientResult<TodoList>;

    /// Replace a list with `list`.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn update_list(&self, list: &TodoList) -> ClientResult<TodoList>;

    /// Delete a list.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn delete_list(&self, id: ListId) -> ClientResult<()>;

    /// Fetch the tasks of one list.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn tasks(&self, list_id: ListId) -> ClientResult<Vec<Task>>;

    /// Create a task inside `list_id`.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn create_task(&self, list_id: ListId, task: &NewTask) -> ClientResult<Task>;

    /// Replace a task with `task`.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn update_task(&self, task: &Task) -> ClientResult<Task>;

    /// Delete a task.
    ///
    /// # Errors
    /// Returns a [`ClientError`] when the request fails.
    async fn delete_task(&self, id: TaskId) -> ClientResult<()>;
}
