use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::identity::AuthErrorReason;
use crate::util::storage::MemoryStorage;

fn cfg() -> IdentityConfig {
    IdentityConfig::from_lookup(|key| (key == crate::config::API_KEY_VAR).then(|| "key".to_owned())).unwrap()
}

fn user(id: &str) -> SessionUser {
    SessionUser {
        id: id.to_owned(),
        email: Some(format!("{id}@example.com")),
        display_name: None,
        avatar_url: None,
        email_verified: true,
    }
}

fn stored(id: &str) -> PersistedSession {
    PersistedSession { user: user(id), id_token: "id-tok".to_owned(), refresh_token: "refresh-tok".to_owned() }
}

fn record(provider: &RestIdentityProvider<MemoryStorage>) -> (Arc<Mutex<Vec<Option<String>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = provider.subscribe(Box::new(move |u| sink.lock().unwrap().push(u.map(|u| u.id))));
    (seen, sub)
}

#[test]
fn operations_fail_when_not_configured() {
    let provider = RestIdentityProvider::new(None, MemoryStorage::new());
    assert!(!provider.is_configured());

    let err = block_on(provider.sign_in("a@b.co", "secret1")).unwrap_err();
    assert_eq!(err, AuthError::not_configured());
    let err = block_on(provider.register("a@b.co", "secret1")).unwrap_err();
    assert_eq!(err, AuthError::not_configured());
    let err = block_on(provider.sign_in_with_oauth(OAuthProvider::Google)).unwrap_err();
    assert_eq!(err, AuthError::not_configured());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_sign_in_publishes_nothing() {
    let provider = RestIdentityProvider::new(Some(cfg()), MemoryStorage::new());
    let (seen, _sub) = record(&provider);

    let err = block_on(provider.sign_in("a@b.co", "secret1")).unwrap_err();
    assert_eq!(err.reason, AuthErrorReason::Network);
    assert!(seen.lock().unwrap().is_empty());
    assert!(provider.session().is_none());
}

#[test]
fn restore_without_stored_session_resolves_signed_out() {
    let provider = RestIdentityProvider::new(Some(cfg()), MemoryStorage::new());
    let (seen, _sub) = record(&provider);

    block_on(provider.restore());
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert_eq!(provider.hub().current(), Some(None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_offline_keeps_stored_user() {
    let storage = MemoryStorage::new();
    save_json(&storage, SESSION_STORAGE_KEY, &stored("u1"));
    let provider = RestIdentityProvider::new(Some(cfg()), storage.clone());
    let (seen, _sub) = record(&provider);

    block_on(provider.restore());
    assert_eq!(*seen.lock().unwrap(), vec![Some("u1".to_owned())]);
    assert_eq!(provider.session(), Some(stored("u1")));
    assert!(storage.get_item(SESSION_STORAGE_KEY).is_some());
}

#[test]
fn restore_without_config_discards_stored_session() {
    let storage = MemoryStorage::new();
    save_json(&storage, SESSION_STORAGE_KEY, &stored("u1"));
    let provider = RestIdentityProvider::new(None, storage.clone());
    let (seen, _sub) = record(&provider);

    block_on(provider.restore());
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert_eq!(storage.get_item(SESSION_STORAGE_KEY), None);
}

#[test]
fn malformed_stored_session_reads_as_signed_out() {
    let storage = MemoryStorage::new();
    storage.set_item(SESSION_STORAGE_KEY, "{\"user\":");
    let provider = RestIdentityProvider::new(Some(cfg()), storage);
    let (seen, _sub) = record(&provider);

    block_on(provider.restore());
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_out_clears_storage_and_publishes_none() {
    let storage = MemoryStorage::new();
    save_json(&storage, SESSION_STORAGE_KEY, &stored("u1"));
    let provider = RestIdentityProvider::new(Some(cfg()), storage.clone());
    block_on(provider.restore());
    let (seen, _sub) = record(&provider);

    block_on(provider.sign_out()).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![Some("u1".to_owned()), None]);
    assert_eq!(storage.get_item(SESSION_STORAGE_KEY), None);
    assert!(provider.session().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn stale_refresh_is_ignored() {
    let storage = MemoryStorage::new();
    save_json(&storage, SESSION_STORAGE_KEY, &stored("u1"));
    let provider = RestIdentityProvider::new(Some(cfg()), storage);
    block_on(provider.restore());
    let armed = provider.current_generation();
    block_on(provider.sign_out()).unwrap();
    let (seen, _sub) = record(&provider);

    block_on(provider.run_refresh(armed));
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert!(provider.session().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn refresh_network_failure_keeps_session() {
    let storage = MemoryStorage::new();
    save_json(&storage, SESSION_STORAGE_KEY, &stored("u1"));
    let provider = RestIdentityProvider::new(Some(cfg()), storage);
    block_on(provider.restore());

    block_on(provider.run_refresh(provider.current_generation()));
    assert_eq!(provider.session(), Some(stored("u1")));
    assert_eq!(provider.hub().current(), Some(Some(user("u1"))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn profile_lookup_failure_falls_back_to_grant_user() {
    let grant_user = SessionUser { email_verified: false, ..user("u1") };
    let resolved = block_on(profile_or(&cfg(), "id-tok", grant_user.clone()));
    assert_eq!(resolved, grant_user);
}
