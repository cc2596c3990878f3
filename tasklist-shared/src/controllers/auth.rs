use super::required_field;
use crate::api::TodoApi;
use crate::config::FeatureFlags;
use crate::errors::{ClientError, ClientResult};
use crate::models::{LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use crate::state::AuthEvent;
use tracing::debug;

/// Shown when registration succeeded but no token could be obtained.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Registration successful! Please log in.";

/// How a successful auth attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A token is stored; go to the dashboard.
    Authenticated,
    /// The account exists but the user must log in by hand.
    LoginRequired,
}

impl AuthOutcome {
    /// Event that feeds this outcome into the login page state.
    #[must_use]
    pub fn event(self) -> AuthEvent {
        match self {
            Self::Authenticated => AuthEvent::Succeeded,
            Self::LoginRequired => AuthEvent::LoginRequired,
        }
    }
}

/// Login and registration against the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthFlow<A, S> {
    api: A,
    session: S,
    features: FeatureFlags,
}

impl<A: TodoApi, S: SessionStore> AuthFlow<A, S> {
    /// Flow that stores tokens from `api` in `session`.
    #[must_use]
    pub fn new(api: A, session: S, features: FeatureFlags) -> Self {
        Self {
            api,
            session,
            features,
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Log in and store the token.
    ///
    /// # Errors
    /// A validation error for blank fields (nothing is sent), otherwise the
    /// login failure. No token is stored on failure.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthOutcome> {
        required_field(username, "username")?;
        required_field(password, "password")?;
        let response = self
            .api
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        self.session.set(&response.token);
        debug!(username, "logged in");
        Ok(AuthOutcome::Authenticated)
    }

    /// Register an account, then log in when auto-login is enabled.
    ///
    /// A rejected auto-login is not an error: the account exists, so the
    /// user is sent to the login form instead. An unreachable backend still
    /// is.
    ///
    /// # Errors
    /// A validation error for blank fields, the registration failure, or a
    /// network failure during auto-login.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthOutcome> {
        required_field(username, "username")?;
        required_field(email, "email")?;
        required_field(password, "password")?;
        let request = RegisterRequest::new(username, email, password);
        self.api.register(&request).await?;
        debug!(username, "registered");

        if !self.features.auto_login {
            return Ok(AuthOutcome::LoginRequired);
        }

        match self.api.login(&request.login_request()).await {
            Ok(response) => {
                self.session.set(&response.token);
                Ok(AuthOutcome::Authenticated)
            }
            Err(error @ ClientError::Network { .. }) => Err(error),
            Err(error) => {
                debug!(%error, "auto-login after registration failed");
                Ok(AuthOutcome::LoginRequired)
            }
        }
    }
}

/// Map the result of an auth attempt to a login page event.
#[must_use]
pub fn auth_event(result: &ClientResult<AuthOutcome>) -> AuthEvent {
    match result {
        Ok(outcome) => outcome.event(),
        Err(error) if !error.is_user_facing() => AuthEvent::Cancelled,
        Err(error) => AuthEvent::Failed(error.to_string()),
    }
}
