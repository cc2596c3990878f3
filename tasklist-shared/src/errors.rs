//! # Client Error Types
//!
//! Every user-initiated action resolves to `Ok` or one of these errors. The
//! web layer turns them into a blocking alert, except for validation failures
//! which are swallowed silently.

use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Shown whenever the backend cannot be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not connect to the API. Please ensure the backend server is running and there are no CORS issues.";

/// Required input that was missing before any request was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was empty or whitespace only
    #[error("title is required")]
    EmptyTitle,

    /// A task was submitted while no list was selected
    #[error("no list is selected")]
    NoListSelected,

    /// A credential field was left empty
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Failures surfaced by the API client and the controllers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input rejected locally; no request was issued
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The backend could not be reached
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network { details: String },

    /// A success response carried a body that did not parse
    #[error("Unexpected response from server: {details}")]
    Decode { details: String },

    /// A dashboard call was attempted without a stored token
    #[error("You are not logged in.")]
    Unauthenticated,

    /// An inline edit could not be saved and the field was reverted
    #[error("Error saving: {0}")]
    EditReverted(Box<ClientError>),
}

impl ClientError {
    /// Shorthand for a [`ClientError::Request`].
    #[must_use]
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a [`ClientError::Network`].
    #[must_use]
    pub fn network(details: impl Into<String>) -> Self {
        Self::Network {
            details: details.into(),
        }
    }

    /// Whether the user should be told about this error.
    ///
    /// Validation failures are not reported; the form simply does nothing.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }

    /// HTTP status of the failed request, if the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::EditReverted(source) => source.status(),
            _ => None,
        }
    }
}
