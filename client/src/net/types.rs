//! Session model and identity-provider wire schema.
//!
//! DESIGN
//! ======
//! `SessionUser` is the only user shape the rest of the app sees. The
//! provider's REST payloads are kept separate and normalized through `From`
//! impls so provider field names never leak into state or components.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Default access-token lifetime when the provider omits `expiresIn`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// Serializable projection of the provider's user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Stable account identifier assigned by the provider.
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl SessionUser {
    /// Best human-facing label: display name, then email, then a generic fallback.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }
}

/// User record as returned by `accounts:lookup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl From<ProviderUser> for SessionUser {
    fn from(user: ProviderUser) -> Self {
        Self {
            id: user.local_id,
            email: user.email,
            display_name: user.display_name,
            avatar_url: user.photo_url,
            email_verified: user.email_verified,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<ProviderUser>,
}

/// Body for `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Body for `accounts:signInWithIdp`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpAuthRequest<'a> {
    pub post_body: String,
    pub request_uri: &'a str,
    pub return_idp_credential: bool,
    pub return_secure_token: bool,
}

/// Token grant returned by password, sign-up, and IdP endpoints.
///
/// Password endpoints omit profile flags; IdP responses include them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub local_id: String,
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}

impl TokenResponse {
    pub fn expires_in_secs(&self) -> u64 {
        parse_expires_in(self.expires_in.as_deref())
    }

    /// Session user from the grant's own claims. Fallback when the profile
    /// lookup after a grant fails; `emailVerified` is absent from password grants.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.local_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.photo_url.clone(),
            email_verified: self.email_verified.unwrap_or(false),
        }
    }
}

/// Secure-token refresh response (snake_case on the wire).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
    pub user_id: String,
}

impl RefreshResponse {
    pub fn expires_in_secs(&self) -> u64 {
        parse_expires_in(self.expires_in.as_deref())
    }
}

/// Provider error envelope: `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

/// Session material the REST adapter persists across reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: SessionUser,
    pub id_token: String,
    pub refresh_token: String,
}

fn parse_expires_in(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
}
