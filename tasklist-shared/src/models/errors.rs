use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-success statuses.
///
/// Every field is optional: the backend may answer with an empty body, a body
/// without `message`, or something that is not JSON at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(default)]
    pub message: Option<String>,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body, treating anything unparseable as empty.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The server-provided message, when present and non-blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    /// Resolve the message to show, falling back when the server sent none.
    #[must_use]
    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        self.message()
            .map_or_else(|| fallback.into(), ToString::to_string)
    }
}
