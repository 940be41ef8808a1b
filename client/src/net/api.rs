//! REST helpers for the identity provider (Identity Toolkit + secure token).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a network [`AuthError`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `Network`; non-2xx responses are decoded from the
//! provider's error envelope and mapped through
//! [`AuthErrorReason::from_provider_code`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::identity::AuthError;
#[cfg(any(test, feature = "hydrate"))]
use super::identity::AuthErrorReason;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorEnvelope;
use super::types::{ProviderUser, RefreshResponse, TokenResponse};
#[cfg(feature = "hydrate")]
use super::types::{IdpAuthRequest, LookupResponse, PasswordAuthRequest};
use crate::config::IdentityConfig;

#[cfg(any(test, feature = "hydrate"))]
fn accounts_endpoint(cfg: &IdentityConfig, method: &str) -> String {
    format!("{}/accounts:{method}?key={}", cfg.identity_base_url, cfg.api_key)
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_endpoint(cfg: &IdentityConfig) -> String {
    format!("{}/token?key={}", cfg.secure_token_base_url, cfg.api_key)
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_body(refresh_token: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "refresh_token")
        .append_pair("refresh_token", refresh_token)
        .finish()
}

/// `postBody` for `accounts:signInWithIdp` carrying the provider's ID token.
#[cfg(any(test, feature = "hydrate"))]
fn idp_post_body(provider_id: &str, id_token: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id_token", id_token)
        .append_pair("providerId", provider_id)
        .finish()
}

/// Build an [`AuthError`] from a non-2xx response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, body: &str) -> AuthError {
    // 5xx is an outage whatever the body says.
    if status >= 500 {
        return AuthError::network();
    }
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            AuthError::new(AuthErrorReason::from_provider_code(&envelope.error.message))
        }
        _ => AuthError::new(AuthErrorReason::Unknown),
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error) -> AuthError {
    log::warn!("identity request failed: {err}");
    AuthError::network()
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = error_from_response(status, &body);
        log::debug!("identity provider rejected request: status={status} reason={}", err.reason.code());
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| {
        log::warn!("unexpected identity response: {e}");
        AuthError::new(AuthErrorReason::Unknown)
    })
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| transport_error(&e))?
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    read_response(resp).await
}

/// Sign in via `accounts:signInWithPassword`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the provider rejects the credentials.
pub async fn sign_in_with_password(cfg: &IdentityConfig, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = PasswordAuthRequest { email, password, return_secure_token: true };
        post_json(&accounts_endpoint(cfg, "signInWithPassword"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, email, password);
        Err(AuthError::network())
    }
}

/// Create an account via `accounts:signUp`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails, the email is taken, or the password is weak.
pub async fn sign_up(cfg: &IdentityConfig, email: &str, password: &str) -> Result<TokenResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = PasswordAuthRequest { email, password, return_secure_token: true };
        post_json(&accounts_endpoint(cfg, "signUp"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, email, password);
        Err(AuthError::network())
    }
}

/// Exchange an OAuth ID token via `accounts:signInWithIdp`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the provider rejects the token.
pub async fn sign_in_with_idp(
    cfg: &IdentityConfig,
    provider_id: &str,
    id_token: &str,
    request_uri: &str,
) -> Result<TokenResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = IdpAuthRequest {
            post_body: idp_post_body(provider_id, id_token),
            request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        };
        post_json(&accounts_endpoint(cfg, "signInWithIdp"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, provider_id, id_token, request_uri);
        Err(AuthError::network())
    }
}

/// Fetch the account profile for `id_token` via `accounts:lookup`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails, the token is invalid, or no user is returned.
pub async fn lookup_user(cfg: &IdentityConfig, id_token: &str) -> Result<ProviderUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "idToken": id_token });
        let resp: LookupResponse = post_json(&accounts_endpoint(cfg, "lookup"), &body).await?;
        resp.users
            .into_iter()
            .next()
            .ok_or_else(|| AuthError::new(AuthErrorReason::InvalidCredentials))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, id_token);
        Err(AuthError::network())
    }
}

/// Trade a refresh token for a fresh ID token.
///
/// # Errors
///
/// Returns an [`AuthError`] if the request fails or the refresh token was revoked.
pub async fn refresh_tokens(cfg: &IdentityConfig, refresh_token: &str) -> Result<RefreshResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&refresh_endpoint(cfg))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(refresh_body(refresh_token))
            .map_err(|e| transport_error(&e))?
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, refresh_token);
        Err(AuthError::network())
    }
}
