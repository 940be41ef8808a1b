use super::*;

fn user(display_name: Option<&str>, email: Option<&str>) -> SessionUser {
    SessionUser {
        id: "u1".to_owned(),
        email: email.map(str::to_owned),
        display_name: display_name.map(str::to_owned),
        avatar_url: None,
        email_verified: false,
    }
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_serializes_camel_case() {
    let value = serde_json::to_value(user(Some("Ada"), Some("a@b.com"))).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "u1",
            "email": "a@b.com",
            "displayName": "Ada",
            "avatarUrl": null,
            "emailVerified": false
        })
    );
}

#[test]
fn session_user_email_verified_defaults_false() {
    let parsed: SessionUser = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": null,
        "displayName": null,
        "avatarUrl": null
    }))
    .unwrap();
    assert!(!parsed.email_verified);
}

#[test]
fn display_label_prefers_display_name_then_email() {
    assert_eq!(user(Some("Ada"), Some("a@b.com")).display_label(), "Ada");
    assert_eq!(user(None, Some("a@b.com")).display_label(), "a@b.com");
    assert_eq!(user(Some("  "), Some("a@b.com")).display_label(), "a@b.com");
    assert_eq!(user(None, None).display_label(), "Account");
}

// =============================================================
// Provider payloads
// =============================================================

#[test]
fn provider_user_normalizes_into_session_user() {
    let raw: LookupResponse = serde_json::from_value(serde_json::json!({
        "users": [{
            "localId": "abc",
            "email": "a@b.com",
            "displayName": "Ada",
            "photoUrl": "https://img.example/ada.png",
            "emailVerified": true,
            "passwordHash": "ignored"
        }]
    }))
    .unwrap();
    let session: SessionUser = raw.users.into_iter().next().unwrap().into();
    assert_eq!(session.id, "abc");
    assert_eq!(session.avatar_url.as_deref(), Some("https://img.example/ada.png"));
    assert!(session.email_verified);
}

#[test]
fn token_response_parses_password_grant() {
    let grant: TokenResponse = serde_json::from_value(serde_json::json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "u1",
        "email": "a@b.com",
        "displayName": "",
        "idToken": "id-1",
        "registered": true,
        "refreshToken": "refresh-1",
        "expiresIn": "3600"
    }))
    .unwrap();
    assert_eq!(grant.expires_in_secs(), 3600);
    let session = grant.session_user();
    assert_eq!(session.id, "u1");
    assert_eq!(session.email.as_deref(), Some("a@b.com"));
    assert!(!session.email_verified);
}

#[test]
fn expires_in_falls_back_to_default_lifetime() {
    let refresh: RefreshResponse = serde_json::from_value(serde_json::json!({
        "id_token": "id-2",
        "refresh_token": "refresh-2",
        "expires_in": "soon",
        "user_id": "u1"
    }))
    .unwrap();
    assert_eq!(refresh.expires_in_secs(), DEFAULT_TOKEN_LIFETIME_SECS);
}

#[test]
fn persisted_session_round_trips_through_json() {
    let session = PersistedSession {
        user: user(Some("Ada"), Some("a@b.com")),
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
    };
    let raw = serde_json::to_string(&session).unwrap();
    let back: PersistedSession = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, session);
}
