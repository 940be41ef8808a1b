//! Session-change fan-out for identity providers.
//!
//! DESIGN
//! ======
//! `SessionHub` remembers the last published session so late subscribers get
//! it immediately, then forwards every later change in publish order.
//! Listeners are cloned out of the registry before they run, so a callback may
//! subscribe or unsubscribe without deadlocking.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::types::SessionUser;

/// Callback invoked with the current session (`None` when signed out).
pub type SessionCallback = Box<dyn Fn(Option<SessionUser>) + Send + Sync>;

type Listener = Arc<dyn Fn(Option<SessionUser>) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// `None` until the first publish; afterwards the last published session.
    current: Option<Option<SessionUser>>,
}

/// Listener registry plus last known session.
#[derive(Clone, Default)]
pub struct SessionHub {
    inner: Arc<Mutex<HubInner>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HubInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `on_change`. Delivers the current session right away when one
    /// has already been published.
    pub fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        let listener: Listener = Arc::from(on_change);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.current.clone())
        };
        if let Some(user) = current {
            listener(user);
        }
        Subscription { id, hub: Arc::downgrade(&self.inner), active: AtomicBool::new(true) }
    }

    /// Record `user` as the current session and notify every listener.
    pub fn publish(&self, user: Option<SessionUser>) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            inner.current = Some(user.clone());
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(user.clone());
        }
    }

    /// Last published session, or `None` before the first publish.
    #[cfg(test)]
    pub fn current(&self) -> Option<Option<SessionUser>> {
        self.lock().current.clone()
    }

    #[cfg(test)]
    pub fn is_resolved(&self) -> bool {
        self.lock().current.is_some()
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle returned by [`SessionHub::subscribe`].
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
    active: AtomicBool,
}

impl Subscription {
    /// Deregister the listener. Safe to call any number of times.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(inner) = self.hub.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
