//! Popup-based OAuth consent for provider sign-in.
//!
//! ARCHITECTURE
//! ============
//! The app opens the provider's authorize URL in a popup with an implicit
//! `id_token` grant. The provider redirects back to `/auth/callback` on this
//! origin, which leaves the token in the popup's URL fragment. The opener polls
//! the popup until the fragment is readable (same origin again) or the window
//! is closed. The returned ID token is then exchanged with
//! `accounts:signInWithIdp` by the provider adapter.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use super::identity::{AuthError, AuthErrorReason, OAuthProvider};
use crate::config::IdentityConfig;

/// Path the host serves for the popup redirect.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Delay between popup polls.
pub const POPUP_POLL_MS: u32 = 250;

/// Give up on a popup that is left open this long.
pub const POPUP_TIMEOUT_MS: u32 = 5 * 60 * 1000;

/// Build the provider authorize URL for an implicit `id_token` grant.
///
/// # Errors
///
/// Returns `Unknown` when no OAuth client ID is configured.
pub fn build_authorize_url(
    cfg: &IdentityConfig,
    provider: OAuthProvider,
    redirect_uri: &str,
    state: &str,
    nonce: &str,
) -> Result<String, AuthError> {
    let client_id = match provider {
        OAuthProvider::Google => cfg.google_client_id.as_deref(),
    }
    .ok_or_else(|| AuthError::with_message(AuthErrorReason::Unknown, "OAuth sign-in is not configured."))?;

    let mut url = url::Url::parse(provider.authorize_endpoint())
        .map_err(|_| AuthError::new(AuthErrorReason::Unknown))?;
    url.query_pairs_mut()
        .append_pair("response_type", "id_token")
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", provider.scope())
        .append_pair("state", state)
        .append_pair("nonce", nonce)
        .append_pair("prompt", "select_account");
    Ok(url.into())
}

/// Extract the ID token from a callback fragment (`#id_token=...&state=...`).
///
/// # Errors
///
/// - `PopupClosed` when the user denied consent.
/// - `Unknown` on a provider error, a state mismatch, or a missing token.
pub fn parse_callback_fragment(fragment: &str, expected_state: &str) -> Result<String, AuthError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut id_token = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "id_token" => id_token = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        if error == "access_denied" {
            return Err(AuthError::new(AuthErrorReason::PopupClosed));
        }
        log::warn!("oauth provider returned error: {error}");
        return Err(AuthError::new(AuthErrorReason::Unknown));
    }
    if state.as_deref() != Some(expected_state) {
        log::warn!("oauth callback state mismatch");
        return Err(AuthError::new(AuthErrorReason::Unknown));
    }
    id_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::new(AuthErrorReason::Unknown))
}

/// Run the consent popup and return `(id_token, redirect_uri)`.
///
/// # Errors
///
/// `PopupClosed` when the popup is blocked, closed, or abandoned; otherwise
/// whatever [`build_authorize_url`] or [`parse_callback_fragment`] report.
#[cfg(feature = "hydrate")]
pub async fn authorize_popup(cfg: &IdentityConfig, provider: OAuthProvider) -> Result<(String, String), AuthError> {
    let window = web_sys::window().ok_or_else(|| AuthError::new(AuthErrorReason::Unknown))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| AuthError::new(AuthErrorReason::Unknown))?;
    let redirect_uri = format!("{origin}{CALLBACK_PATH}");
    let state = uuid::Uuid::new_v4().to_string();
    let nonce = uuid::Uuid::new_v4().to_string();
    let url = build_authorize_url(cfg, provider, &redirect_uri, &state, &nonce)?;

    let popup = window
        .open_with_url_and_target_and_features(&url, "evdash-oauth", "popup,width=500,height=640")
        .ok()
        .flatten()
        .ok_or_else(|| {
            log::warn!("oauth popup was blocked");
            AuthError::new(AuthErrorReason::PopupClosed)
        })?;

    let mut waited = 0;
    while waited < POPUP_TIMEOUT_MS {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(POPUP_POLL_MS))).await;
        waited += POPUP_POLL_MS;

        if popup.closed().unwrap_or(true) {
            return Err(AuthError::new(AuthErrorReason::PopupClosed));
        }
        // Cross-origin while the provider page is showing.
        let Ok(hash) = popup.location().hash() else {
            continue;
        };
        if hash.is_empty() {
            continue;
        }
        let _ = popup.close();
        return parse_callback_fragment(&hash, &state).map(|token| (token, redirect_uri));
    }

    let _ = popup.close();
    Err(AuthError::new(AuthErrorReason::PopupClosed))
}
