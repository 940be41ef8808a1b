use super::*;

fn cfg(client_id: Option<&str>) -> IdentityConfig {
    let client_id = client_id.map(str::to_owned);
    IdentityConfig::from_lookup(move |key| match key {
        crate::config::API_KEY_VAR => Some("key".to_owned()),
        crate::config::GOOGLE_CLIENT_ID_VAR => client_id.clone(),
        _ => None,
    })
    .unwrap()
}

#[test]
fn authorize_url_carries_implicit_grant_parameters() {
    let url = build_authorize_url(
        &cfg(Some("client-1")),
        OAuthProvider::Google,
        "http://localhost:3000/auth/callback",
        "st",
        "nn",
    )
    .unwrap();
    let parsed = url::Url::parse(&url).unwrap();
    assert_eq!(parsed.host_str(), Some("accounts.google.com"));

    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    let get = |k: &str| pairs.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("response_type"), Some("id_token"));
    assert_eq!(get("client_id"), Some("client-1"));
    assert_eq!(get("redirect_uri"), Some("http://localhost:3000/auth/callback"));
    assert_eq!(get("scope"), Some("openid email profile"));
    assert_eq!(get("state"), Some("st"));
    assert_eq!(get("nonce"), Some("nn"));
}

#[test]
fn authorize_url_requires_client_id() {
    let err = build_authorize_url(&cfg(None), OAuthProvider::Google, "http://x/cb", "s", "n").unwrap_err();
    assert_eq!(err.reason, AuthErrorReason::Unknown);
    assert_eq!(err.message, "OAuth sign-in is not configured.");
}

#[test]
fn fragment_with_matching_state_yields_token() {
    let token = parse_callback_fragment("#id_token=abc.def&state=st&token_type=Bearer", "st").unwrap();
    assert_eq!(token, "abc.def");
}

#[test]
fn fragment_without_hash_prefix_is_accepted() {
    assert_eq!(parse_callback_fragment("state=st&id_token=t", "st").unwrap(), "t");
}

#[test]
fn denied_consent_maps_to_popup_closed() {
    let err = parse_callback_fragment("#error=access_denied&state=st", "st").unwrap_err();
    assert_eq!(err.reason, AuthErrorReason::PopupClosed);
}

#[test]
fn other_provider_errors_are_unknown() {
    let err = parse_callback_fragment("#error=invalid_request&state=st", "st").unwrap_err();
    assert_eq!(err.reason, AuthErrorReason::Unknown);
}

#[test]
fn state_mismatch_is_rejected() {
    let err = parse_callback_fragment("#id_token=t&state=other", "st").unwrap_err();
    assert_eq!(err.reason, AuthErrorReason::Unknown);
}

#[test]
fn missing_token_is_rejected() {
    assert!(parse_callback_fragment("#state=st", "st").is_err());
    assert!(parse_callback_fragment("#state=st&id_token=", "st").is_err());
}
