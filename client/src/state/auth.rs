//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal<AuthState>` provided via context. The route guard and
//! user-aware components read it; only [`AuthState::apply`] writes it, driven
//! by the auth listener (session events) and the auth forms (operation
//! lifecycle).
//!
//! DESIGN
//! ======
//! Transitions are a pure reducer over a closed action set so every state
//! change is replayable in tests without a browser or provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Authentication state tracking the current user and operation lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// False until the provider reports the session status for the first time.
    pub is_initialized: bool,
    /// True while a sign-in, registration, OAuth, or sign-out call is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

/// State transitions for [`AuthState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// The provider reported the session (`None` when signed out).
    SessionObserved(Option<SessionUser>),
    OperationStarted,
    /// An operation resolved; `None` is the sign-out success case.
    OperationSucceeded(Option<SessionUser>),
    OperationFailed(String),
    ErrorCleared,
    LoadingSet(bool),
}

/// Auth operations the forms and sidebar can start. Used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    SignIn,
    Register,
    OAuth,
    SignOut,
}

impl AuthOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::Register => "register",
            Self::OAuth => "oauth_sign_in",
            Self::SignOut => "sign_out",
        }
    }
}

impl AuthState {
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::SessionObserved(user) => {
                self.user = user;
                self.is_initialized = true;
                self.loading = false;
            }
            AuthAction::OperationStarted => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::OperationSucceeded(user) => {
                self.loading = false;
                self.user = user;
                self.error = None;
            }
            AuthAction::OperationFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            AuthAction::ErrorCleared => self.error = None,
            AuthAction::LoadingSet(loading) => self.loading = loading,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
