//! Session token storage.

use std::cell::RefCell;

/// Key under which the browser keeps the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Holder of the single bearer token of this tab.
///
/// Implementations never validate or expire the token; an invalid token only
/// shows up as an authorization failure from the backend.
pub trait SessionStore {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Forget the stored token.
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory session, used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    /// A session that is already logged in.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
