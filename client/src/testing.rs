//! Test doubles shared by unit tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::identity::{AuthError, IdentityProvider, OAuthProvider};
use crate::net::session::{SessionCallback, SessionHub, Subscription};
use crate::net::types::SessionUser;
use crate::state::auth::{AuthAction, AuthState};

pub(crate) fn user(id: &str, email: &str) -> SessionUser {
    SessionUser {
        id: id.to_owned(),
        email: Some(email.to_owned()),
        display_name: None,
        avatar_url: None,
        email_verified: false,
    }
}

/// Scripted identity provider. Successful operations publish to its hub the
/// way the real adapter does.
#[derive(Default)]
pub(crate) struct FakeIdentity {
    pub hub: SessionHub,
    calls: Mutex<Vec<String>>,
    next_user: Mutex<Option<Result<SessionUser, AuthError>>>,
    sign_out_result: Mutex<Option<AuthError>>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for the next sign-in, register, or OAuth call.
    pub fn script(&self, result: Result<SessionUser, AuthError>) {
        *self.next_user.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
    }

    pub fn fail_sign_out(&self, err: AuthError) {
        *self.sign_out_result.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
    }

    fn take_user(&self) -> Result<SessionUser, AuthError> {
        let result = self
            .next_user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_else(|| Err(AuthError::network()));
        if let Ok(user) = &result {
            self.hub.publish(Some(user.clone()));
        }
        result
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<SessionUser, AuthError> {
        self.record(format!("sign_in:{email}"));
        self.take_user()
    }

    async fn register(&self, email: &str, _password: &str) -> Result<SessionUser, AuthError> {
        self.record(format!("register:{email}"));
        self.take_user()
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError> {
        self.record(format!("oauth:{}", provider.provider_id()));
        self.take_user()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out".to_owned());
        if let Some(err) = self.sign_out_result.lock().unwrap_or_else(PoisonError::into_inner).take() {
            return Err(err);
        }
        self.hub.publish(None);
        Ok(())
    }

    fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        self.hub.subscribe(on_change)
    }
}

/// Applies dispatched actions to an in-memory [`AuthState`] and keeps the log.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    state: Arc<Mutex<AuthState>>,
    actions: Arc<Mutex<Vec<AuthAction>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatcher(&self) -> impl Fn(AuthAction) + Clone + Send + Sync + 'static {
        let this = self.clone();
        move |action: AuthAction| {
            this.state.lock().unwrap_or_else(PoisonError::into_inner).apply(action.clone());
            this.actions.lock().unwrap_or_else(PoisonError::into_inner).push(action);
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn actions(&self) -> Vec<AuthAction> {
        self.actions.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
