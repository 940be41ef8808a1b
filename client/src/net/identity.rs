//! Identity-provider contract consumed by the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms, the sidebar, and the auth listener only ever talk to
//! [`IdentityProvider`]. The REST-backed implementation lives in
//! `net::provider`; tests substitute a scripted fake.
//!
//! ERROR HANDLING
//! ==============
//! Every provider failure is normalized to [`AuthError`] with a closed
//! [`AuthErrorReason`] and a message that is safe to show in a form.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::session::{SessionCallback, Subscription};
use super::types::SessionUser;

/// Failure categories surfaced to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorReason {
    InvalidCredentials,
    EmailInUse,
    WeakPassword,
    PopupClosed,
    Network,
    Unknown,
}

impl AuthErrorReason {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid-credentials",
            Self::EmailInUse => "email-in-use",
            Self::WeakPassword => "weak-password",
            Self::PopupClosed => "popup-closed",
            Self::Network => "network",
            Self::Unknown => "unknown",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password.",
            Self::EmailInUse => "An account with this email already exists.",
            Self::WeakPassword => "Password should be at least 6 characters.",
            Self::PopupClosed => "Sign-in was cancelled before it completed.",
            Self::Network => "Network error. Check your connection and try again.",
            Self::Unknown => "An error occurred",
        }
    }

    /// Map a provider error message (e.g. `"WEAK_PASSWORD : Password should be..."`)
    /// onto the app's taxonomy.
    pub fn from_provider_code(raw: &str) -> Self {
        let code = raw.split(':').next().unwrap_or_default().trim();
        match code {
            "EMAIL_NOT_FOUND"
            | "INVALID_PASSWORD"
            | "INVALID_LOGIN_CREDENTIALS"
            | "INVALID_EMAIL"
            | "USER_DISABLED"
            | "USER_NOT_FOUND"
            | "TOKEN_EXPIRED"
            | "INVALID_REFRESH_TOKEN"
            | "INVALID_ID_TOKEN" => Self::InvalidCredentials,
            "EMAIL_EXISTS" => Self::EmailInUse,
            "WEAK_PASSWORD" => Self::WeakPassword,
            _ => Self::Unknown,
        }
    }
}

/// Normalized identity-provider error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub reason: AuthErrorReason,
    pub message: String,
}

impl AuthError {
    pub fn new(reason: AuthErrorReason) -> Self {
        Self { reason, message: reason.default_message().to_owned() }
    }

    pub fn with_message(reason: AuthErrorReason, message: impl Into<String>) -> Self {
        Self { reason, message: message.into() }
    }

    pub fn network() -> Self {
        Self::new(AuthErrorReason::Network)
    }

    pub fn not_configured() -> Self {
        Self::with_message(AuthErrorReason::Unknown, "Identity provider is not configured.")
    }

    pub fn is_network(&self) -> bool {
        self.reason == AuthErrorReason::Network
    }
}

/// OAuth identity providers offered on the auth forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Provider ID understood by `accounts:signInWithIdp`.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
        }
    }

    pub fn authorize_endpoint(self) -> &'static str {
        match self {
            Self::Google => "https://accounts.google.com/o/oauth2/v2/auth",
        }
    }

    pub fn scope(self) -> &'static str {
        match self {
            Self::Google => "openid email profile",
        }
    }
}

/// Contract the app relies on from the external identity service.
///
/// Futures are `?Send`: browser HTTP futures are bound to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials`, `Network`, or `Unknown`.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// `EmailInUse`, `WeakPassword`, `Network`, or `Unknown`.
    async fn register(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;

    /// Run an interactive provider-hosted consent flow.
    ///
    /// # Errors
    ///
    /// `PopupClosed`, `Network`, or `Unknown`.
    async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<SessionUser, AuthError>;

    /// Invalidate the current session.
    ///
    /// # Errors
    ///
    /// `Network` when the provider cannot be reached.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Register for session changes. The callback fires with the current
    /// session as soon as it is known and again on every change.
    fn subscribe(&self, on_change: SessionCallback) -> Subscription;
}
