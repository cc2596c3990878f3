//! Login/registration page state.

/// Which form a phase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Username and password.
    Login,
    /// Username, email and password.
    Register,
}

/// Phase of the login page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// The login form is shown. Initial phase.
    #[default]
    ShowingLogin,
    /// The registration form is shown.
    ShowingRegister,
    /// A request for `mode` is in flight; forms are disabled.
    Authenticating(AuthMode),
    /// Token stored, the dashboard is next. Terminal.
    AuthSucceeded,
    /// The last attempt failed; the same form is shown again.
    AuthFailed { mode: AuthMode, message: String },
}

/// Inputs to [`AuthPhase::on`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// "Login here" was clicked.
    ShowLogin,
    /// "Register here" was clicked.
    ShowRegister,
    /// The visible form was submitted.
    Submit,
    /// A token was stored.
    Succeeded,
    /// Registration went through but the user has to log in by hand.
    LoginRequired,
    /// The attempt failed with this message.
    Failed(String),
    /// The attempt was dropped before reaching the backend.
    Cancelled,
}

impl AuthPhase {
    /// Transition function of the login page.
    ///
    /// Events that make no sense in the current phase leave it unchanged.
    #[must_use]
    pub fn on(&self, event: AuthEvent) -> Self {
        match (self, event) {
            (Self::AuthSucceeded, _) | (Self::Authenticating(_), AuthEvent::Submit) => self.clone(),
            (Self::Authenticating(_), AuthEvent::Succeeded) => Self::AuthSucceeded,
            (Self::Authenticating(AuthMode::Register), AuthEvent::LoginRequired) => {
                Self::ShowingLogin
            }
            (Self::Authenticating(mode), AuthEvent::Failed(message)) => Self::AuthFailed {
                mode: *mode,
                message,
            },
            (Self::Authenticating(AuthMode::Login), AuthEvent::Cancelled) => Self::ShowingLogin,
            (Self::Authenticating(AuthMode::Register), AuthEvent::Cancelled) => {
                Self::ShowingRegister
            }
            (Self::Authenticating(_), _) => self.clone(),
            (_, AuthEvent::ShowLogin) => Self::ShowingLogin,
            (_, AuthEvent::ShowRegister) => Self::ShowingRegister,
            (_, AuthEvent::Submit) => match self.form() {
                Some(mode) => Self::Authenticating(mode),
                None => self.clone(),
            },
            (
                _,
                AuthEvent::Succeeded
                | AuthEvent::LoginRequired
                | AuthEvent::Failed(_)
                | AuthEvent::Cancelled,
            ) => self.clone(),
        }
    }

    /// The form currently on screen, if any.
    #[must_use]
    pub fn form(&self) -> Option<AuthMode> {
        match self {
            Self::ShowingLogin => Some(AuthMode::Login),
            Self::ShowingRegister => Some(AuthMode::Register),
            Self::Authenticating(mode) | Self::AuthFailed { mode, .. } => Some(*mode),
            Self::AuthSucceeded => None,
        }
    }

    /// Whether a request is in flight and submits are ignored.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Authenticating(_))
    }

    /// Message of the last failed attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::AuthFailed { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_forms_needs_no_request() {
        let phase = AuthPhase::default();
        assert_eq!(phase.form(), Some(AuthMode::Login));

        let phase = phase.on(AuthEvent::ShowRegister);
        assert_eq!(phase, AuthPhase::ShowingRegister);

        let phase = phase.on(AuthEvent::ShowLogin);
        assert_eq!(phase, AuthPhase::ShowingLogin);
    }

    #[test]
    fn successful_login_is_terminal() {
        let phase = AuthPhase::ShowingLogin.on(AuthEvent::Submit);
        assert_eq!(phase, AuthPhase::Authenticating(AuthMode::Login));
        assert!(phase.is_busy());

        let phase = phase.on(AuthEvent::Succeeded);
        assert_eq!(phase, AuthPhase::AuthSucceeded);
        assert_eq!(phase.on(AuthEvent::ShowRegister), AuthPhase::AuthSucceeded);
        assert_eq!(phase.form(), None);
    }

    #[test]
    fn failure_returns_to_the_same_form() {
        let phase = AuthPhase::ShowingRegister
            .on(AuthEvent::Submit)
            .on(AuthEvent::Failed("Registration failed.".into()));

        assert_eq!(phase.form(), Some(AuthMode::Register));
        assert_eq!(phase.error(), Some("Registration failed."));
        assert!(!phase.is_busy());

        let retry = phase.on(AuthEvent::Submit);
        assert_eq!(retry, AuthPhase::Authenticating(AuthMode::Register));
    }

    #[test]
    fn registration_without_token_lands_on_login_form() {
        let phase = AuthPhase::ShowingRegister
            .on(AuthEvent::Submit)
            .on(AuthEvent::LoginRequired);
        assert_eq!(phase, AuthPhase::ShowingLogin);
    }

    #[test]
    fn cancelled_attempt_shows_the_form_again() {
        let phase = AuthPhase::ShowingRegister
            .on(AuthEvent::Submit)
            .on(AuthEvent::Cancelled);
        assert_eq!(phase, AuthPhase::ShowingRegister);
        assert_eq!(phase.error(), None);
    }

    #[test]
    fn toggles_are_ignored_while_authenticating() {
        let phase = AuthPhase::Authenticating(AuthMode::Login);
        assert_eq!(phase.on(AuthEvent::ShowRegister), phase);
        assert_eq!(phase.on(AuthEvent::Submit), phase);
    }

    #[test]
    fn stray_results_are_ignored_outside_authenticating() {
        let phase = AuthPhase::ShowingLogin;
        assert_eq!(phase.on(AuthEvent::Succeeded), phase);
        assert_eq!(phase.on(AuthEvent::Failed("x".into())), phase);
    }
}
