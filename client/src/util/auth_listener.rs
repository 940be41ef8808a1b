//! Bridge from the identity provider's session stream into the auth store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by `App`. Every session event becomes
//! `AuthAction::SessionObserved`, which is also what initializes the store.
//!
//! DESIGN
//! ======
//! `AuthListener` owns at most one subscription. Mounting again replaces the
//! previous one, and teardown happens through Leptos `on_cleanup`, so a
//! remounted app never accumulates listeners.

#[cfg(test)]
#[path = "auth_listener_test.rs"]
mod auth_listener_test;

use std::sync::{Mutex, PoisonError};

use leptos::prelude::*;

use crate::net::identity::IdentityProvider;
use crate::net::session::Subscription;
use crate::state::auth::{AuthAction, AuthState};

#[derive(Debug, Default)]
pub struct AuthListener {
    subscription: Mutex<Option<Subscription>>,
}

impl AuthListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `provider`, forwarding every session event to `dispatch`.
    pub fn mount<P, D>(&self, provider: &P, dispatch: D)
    where
        P: IdentityProvider + ?Sized,
        D: Fn(AuthAction) + Send + Sync + 'static,
    {
        self.unmount();
        let subscription = provider.subscribe(Box::new(move |user| {
            log::debug!("session event: {}", user.as_ref().map_or("signed out", |u| u.id.as_str()));
            dispatch(AuthAction::SessionObserved(user));
        }));
        log::debug!("auth listener mounted");
        *self.subscription.lock().unwrap_or_else(PoisonError::into_inner) = Some(subscription);
    }

    /// Release the subscription. Safe to call when not mounted.
    pub fn unmount(&self) {
        let previous = self.subscription.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(subscription) = previous {
            subscription.unsubscribe();
            log::debug!("auth listener unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(Subscription::is_active)
    }
}

impl Drop for AuthListener {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a listener feeding `auth` for the lifetime of the current owner.
pub fn install_auth_listener<P>(provider: &P, auth: RwSignal<AuthState>)
where
    P: IdentityProvider + ?Sized,
{
    let listener = AuthListener::new();
    listener.mount(provider, move |action| {
        // The signal may already be disposed when a late event arrives.
        let _ = auth.try_update(|state| state.apply(action));
    });
    on_cleanup(move || listener.unmount());
}
