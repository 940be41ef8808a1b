//! REST-backed [`IdentityProvider`] with persisted sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only component that holds tokens. The app sees nothing but
//! [`SessionUser`] values delivered through [`SessionHub`].
//!
//! DESIGN
//! ======
//! - `restore` runs once at startup. It re-validates the persisted refresh
//!   token and publishes the first session value, which is what flips the app
//!   from "resolving" to initialized.
//! - A successful operation persists the tokens and publishes the user.
//! - Token refresh runs on a timer in the browser. A refresh the provider
//!   rejects clears the session and publishes `None`, so a remote revocation
//!   reaches the UI the same way as a local sign-out.
//! - `generation` is bumped on every session change. A refresh timer armed for
//!   an older generation exits without touching state.
//!
//! ERROR HANDLING
//! ==============
//! A network failure during `restore` keeps the stored user signed in; the
//! next successful refresh re-validates it. Any other failure clears it.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::api;
use super::identity::{AuthError, IdentityProvider, OAuthProvider};
use super::session::{SessionCallback, SessionHub, Subscription};
use super::types::{PersistedSession, SessionUser};
use crate::config::IdentityConfig;
use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Storage key for the persisted session.
pub const SESSION_STORAGE_KEY: &str = "evdash.session";

/// Refresh this many seconds before the access token expires.
pub const REFRESH_MARGIN_SECS: u64 = 60;

/// Delay before retrying a refresh that failed on the network.
pub const REFRESH_RETRY_SECS: u64 = 30;

/// Profile from `accounts:lookup`, or `fallback` when the lookup fails.
pub(crate) async fn profile_or(cfg: &IdentityConfig, id_token: &str, fallback: SessionUser) -> SessionUser {
    match api::lookup_user(cfg, id_token).await {
        Ok(profile) => SessionUser::from(profile),
        Err(e) => {
            log::debug!("profile lookup failed, using grant claims: {e}");
            fallback
        }
    }
}

#[derive(Clone)]
pub struct RestIdentityProvider<S = LocalStorage> {
    config: Option<Arc<IdentityConfig>>,
    storage: S,
    hub: SessionHub,
    session: Arc<Mutex<Option<PersistedSession>>>,
    generation: Arc<AtomicU64>,
}

impl<S> RestIdentityProvider<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    /// Create a provider. With `config == None` every operation fails with
    /// [`AuthError::not_configured`] and `restore` resolves to signed-out.
    pub fn new(config: Option<IdentityConfig>, storage: S) -> Self {
        Self {
            config: config.map(Arc::new),
            storage,
            hub: SessionHub::new(),
            session: Arc::new(Mutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    #[cfg(test)]
    pub fn hub(&self) -> &SessionHub {
        &self.hub
    }

    /// Current persisted session material, if signed in.
    pub fn session(&self) -> Option<PersistedSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn config(&self) -> Result<&IdentityConfig, AuthError> {
        self.config.as_deref().ok_or_else(AuthError::not_configured)
    }

    /// Resolve the initial session from storage and publish it.
    pub async fn restore(&self) {
        let Some(stored) = load_json::<PersistedSession>(&self.storage, SESSION_STORAGE_KEY) else {
            log::debug!("no persisted session");
            self.hub.publish(None);
            return;
        };
        let Some(cfg) = self.config.clone() else {
            log::warn!("persisted session ignored: identity provider not configured");
            self.clear();
            return;
        };

        match api::refresh_tokens(&cfg, &stored.refresh_token).await {
            Ok(grant) => {
                let user = profile_or(&cfg, &grant.id_token, stored.user).await;
                log::info!("session restored for {}", user.id);
                let expires_in = grant.expires_in_secs();
                self.establish(user, grant.id_token, grant.refresh_token, expires_in);
            }
            Err(e) if e.is_network() => {
                log::warn!("session restore offline; keeping stored user");
                self.set_session(Some(stored.clone()));
                self.hub.publish(Some(stored.user));
                self.schedule_refresh(REFRESH_RETRY_SECS);
            }
            Err(e) => {
                log::info!("stored session rejected: {}", e.reason.code());
                self.clear();
            }
        }
    }

    fn set_session(&self, session: Option<PersistedSession>) {
        match &session {
            Some(s) => save_json(&self.storage, SESSION_STORAGE_KEY, s),
            None => self.storage.remove_item(SESSION_STORAGE_KEY),
        }
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Persist tokens for `user`, arm the refresh timer, and publish.
    fn establish(&self, user: SessionUser, id_token: String, refresh_token: String, expires_in: u64) -> SessionUser {
        self.set_session(Some(PersistedSession { user: user.clone(), id_token, refresh_token }));
        self.schedule_refresh(expires_in.saturating_sub(REFRESH_MARGIN_SECS).max(1));
        self.hub.publish(Some(user.clone()));
        user
    }

    /// Drop the session and publish `None`.
    fn clear(&self) {
        self.set_session(None);
        self.hub.publish(None);
    }

    #[cfg(feature = "hydrate")]
    fn schedule_refresh(&self, delay_secs: u64) {
        let this = self.clone();
        let armed = self.generation.load(Ordering::SeqCst);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(delay_secs)).await;
            this.run_refresh(armed).await;
        });
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_self)]
    fn schedule_refresh(&self, delay_secs: u64) {
        let _ = delay_secs;
    }

    /// One refresh attempt for the session armed at `armed`.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) async fn run_refresh(&self, armed: u64) {
        if self.generation.load(Ordering::SeqCst) != armed {
            return;
        }
        let (Some(cfg), Some(current)) = (self.config.clone(), self.session()) else {
            return;
        };

        let result = api::refresh_tokens(&cfg, &current.refresh_token).await;
        // A sign-in or sign-out may have landed while the request was in flight.
        if self.generation.load(Ordering::SeqCst) != armed {
            return;
        }
        match result {
            Ok(grant) => {
                let expires_in = grant.expires_in_secs();
                self.set_session(Some(PersistedSession {
                    user: current.user,
                    id_token: grant.id_token,
                    refresh_token: grant.refresh_token,
                }));
                log::debug!("access token refreshed");
                self.schedule_refresh(expires_in.saturating_sub(REFRESH_MARGIN_SECS).max(1));
            }
            Err(e) if e.is_network() => {
                log::warn!("token refresh failed on network; retrying");
                self.schedule_refresh(REFRESH_RETRY_SECS);
            }
            Err(e) => {
                log::info!("session invalidated by provider: {}", e.reason.code());
                self.clear();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait(?Send)]
impl<S> IdentityProvider for RestIdentityProvider<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let cfg = self.config()?;
        let grant = api::sign_in_with_password(cfg, email, password).await?;
        log::info!("signed in with password: {}", grant.local_id);
        let expires_in = grant.expires_in_secs();
        let user = profile_or(cfg, &grant.id_token, grant.session_user()).await;
        Ok(self.establish(user, grant.id_token, grant.refresh_token, expires_in))
    }

    async fn register(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let cfg = self.config()?;
        let grant = api::sign_up(cfg, email, password).await?;
        log::info!("account created: {}", grant.local_id);
        let expires_in = grant.expires_in_secs();
        let user = profile_or(cfg, &grant.id_token, grant.session_user()).await;
        Ok(self.establish(user, grant.id_token, grant.refresh_token, expires_in))
    }

    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError> {
        let cfg = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            let (id_token, redirect_uri) = super::oauth::authorize_popup(cfg, provider).await?;
            let grant = api::sign_in_with_idp(cfg, provider.provider_id(), &id_token, &redirect_uri).await?;
            log::info!("signed in with {}: {}", provider.provider_id(), grant.local_id);
            let expires_in = grant.expires_in_secs();
            let user = profile_or(cfg, &grant.id_token, grant.session_user()).await;
        Ok(self.establish(user, grant.id_token, grant.refresh_token, expires_in))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (cfg, provider);
            Err(AuthError::network())
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        log::info!("signing out");
        self.clear();
        Ok(())
    }

    fn subscribe(&self, on_change: SessionCallback) -> Subscription {
        self.hub.subscribe(on_change)
    }
}
