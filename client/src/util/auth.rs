//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms, the sidebar, and the route guard all go through these helpers so
//! the store only ever changes via its reducer and every auth operation has
//! the same started/succeeded/failed lifecycle.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::identity::AuthError;
use crate::net::types::SessionUser;
use crate::state::auth::{AuthAction, AuthOperation, AuthState};
use crate::state::ui::{UiAction, UiState};

/// What the route guard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Initializing,
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    pub fn from_auth(state: &AuthState) -> Self {
        if !state.is_initialized {
            Self::Initializing
        } else if state.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    /// Next guard state for `state`. Once initialized, the guard never goes
    /// back to `Initializing`.
    #[must_use]
    pub fn advance(self, state: &AuthState) -> Self {
        match (self, Self::from_auth(state)) {
            (Self::Initializing, next) => next,
            (_, Self::Initializing) => {
                if state.is_authenticated() {
                    Self::Authenticated
                } else {
                    Self::Unauthenticated
                }
            }
            (_, next) => next,
        }
    }
}

/// Apply `action` to the auth store.
pub fn dispatch(auth: RwSignal<AuthState>, action: AuthAction) {
    auth.update(|state| state.apply(action));
}

/// Apply `action` to the UI store.
pub fn dispatch_ui(ui: RwSignal<UiState>, action: UiAction) {
    ui.update(|state| state.apply(action));
}

/// Run one auth operation with the standard store lifecycle.
///
/// Dispatches `OperationStarted`, awaits `work`, then `OperationSucceeded`
/// with the resulting session or `OperationFailed` with the error message.
///
/// # Errors
///
/// Returns the adapter error unchanged after recording it in the store.
pub async fn run_operation<D, F>(
    dispatch: &D,
    operation: AuthOperation,
    work: F,
) -> Result<Option<SessionUser>, AuthError>
where
    D: Fn(AuthAction),
    F: Future<Output = Result<Option<SessionUser>, AuthError>>,
{
    log::debug!("{} started", operation.as_str());
    dispatch(AuthAction::OperationStarted);
    match work.await {
        Ok(user) => {
            log::info!(
                "{} succeeded: {}",
                operation.as_str(),
                user.as_ref().map_or("signed out", |u| u.id.as_str())
            );
            dispatch(AuthAction::OperationSucceeded(user.clone()));
            Ok(user)
        }
        Err(err) => {
            log::warn!("{} failed: {}", operation.as_str(), err.reason.code());
            dispatch(AuthAction::OperationFailed(err.message.clone()));
            Err(err)
        }
    }
}
