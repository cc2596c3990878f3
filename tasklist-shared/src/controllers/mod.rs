//! Orchestration of user intents.
//!
//! Controllers pair a [`crate::api::TodoApi`] with the state they keep in
//! sync. Each public method is one user action: it validates input, talks to
//! the backend, and refetches whatever the action changed.

pub mod auth;
pub mod dashboard;

pub use auth::{AuthFlow, AuthOutcome, LOGIN_REQUIRED_MESSAGE, auth_event};
pub use dashboard::DashboardController;

use crate::errors::ValidationError;

/// Trimmed, non-empty title or [`ValidationError::EmptyTitle`].
pub(crate) fn required_title(title: &str) -> Result<&str, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(trimmed)
    }
}

/// Reject a blank credential field.
pub(crate) fn required_field(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}
