use futures::executor::block_on;

use super::*;
use crate::net::identity::{AuthErrorReason, IdentityProvider};
use crate::testing::{FakeIdentity, Recorder, user};

fn initialized(user: Option<SessionUser>) -> AuthState {
    AuthState { user, is_initialized: true, ..AuthState::default() }
}

// =============================================================
// GuardState
// =============================================================

#[test]
fn guard_initializing_until_first_session_event() {
    assert_eq!(GuardState::from_auth(&AuthState::default()), GuardState::Initializing);

    let loading_with_user = AuthState { user: Some(user("u1", "a@b.com")), ..AuthState::default() };
    assert_eq!(GuardState::from_auth(&loading_with_user), GuardState::Initializing);
}

#[test]
fn startup_loading_resolves_with_restored_session() {
    let mut state = AuthState::default();
    state.apply(AuthAction::LoadingSet(true));
    assert_eq!(GuardState::from_auth(&state), GuardState::Initializing);

    state.apply(AuthAction::SessionObserved(Some(user("u1", "a@b.com"))));
    assert!(!state.loading);
    assert_eq!(GuardState::Initializing.advance(&state), GuardState::Authenticated);
}

#[test]
fn guard_follows_user_once_initialized() {
    assert_eq!(GuardState::from_auth(&initialized(None)), GuardState::Unauthenticated);
    assert_eq!(
        GuardState::from_auth(&initialized(Some(user("u1", "a@b.com")))),
        GuardState::Authenticated
    );
}

#[test]
fn guard_never_returns_to_initializing() {
    let guard = GuardState::Initializing.advance(&initialized(None));
    assert_eq!(guard, GuardState::Unauthenticated);

    let uninitialized_with_user = AuthState { user: Some(user("u1", "a@b.com")), ..AuthState::default() };
    assert_eq!(guard.advance(&uninitialized_with_user), GuardState::Authenticated);
    assert_eq!(guard.advance(&AuthState::default()), GuardState::Unauthenticated);
}

#[test]
fn guard_moves_between_signed_in_and_out() {
    let guard = GuardState::Authenticated.advance(&initialized(None));
    assert_eq!(guard, GuardState::Unauthenticated);
    assert_eq!(guard.advance(&initialized(Some(user("u1", "a@b.com")))), GuardState::Authenticated);
}

// =============================================================
// run_operation
// =============================================================

#[test]
fn login_scenario_ends_authenticated() {
    let recorder = Recorder::new();
    let dispatch = recorder.dispatcher();
    dispatch(AuthAction::SessionObserved(None));

    let fake = FakeIdentity::new();
    fake.script(Ok(user("u1", "a@b.com")));
    let result = block_on(run_operation(&dispatch, AuthOperation::SignIn, async {
        fake.sign_in("a@b.com", "secret1").await.map(Some)
    }));

    assert_eq!(result.unwrap().map(|u| u.id), Some("u1".to_owned()));
    assert_eq!(
        recorder.actions()[1..],
        [AuthAction::OperationStarted, AuthAction::OperationSucceeded(Some(user("u1", "a@b.com")))]
    );
    let state = recorder.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(GuardState::from_auth(&state), GuardState::Authenticated);
}

#[test]
fn failed_operation_records_message_and_keeps_user() {
    let recorder = Recorder::new();
    let dispatch = recorder.dispatcher();
    dispatch(AuthAction::SessionObserved(None));

    let fake = FakeIdentity::new();
    fake.script(Err(AuthError::new(AuthErrorReason::InvalidCredentials)));
    let err = block_on(run_operation(&dispatch, AuthOperation::SignIn, async {
        fake.sign_in("a@b.com", "wrong1").await.map(Some)
    }))
    .unwrap_err();

    assert_eq!(err.reason, AuthErrorReason::InvalidCredentials);
    let state = recorder.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password."));
    assert_eq!(state.user, None);
}

#[test]
fn sign_out_scenario_ends_unauthenticated() {
    let recorder = Recorder::new();
    let dispatch = recorder.dispatcher();
    dispatch(AuthAction::SessionObserved(Some(user("u1", "a@b.com"))));
    let before = GuardState::from_auth(&recorder.state());

    let fake = FakeIdentity::new();
    block_on(run_operation(&dispatch, AuthOperation::SignOut, async {
        fake.sign_out().await.map(|()| None)
    }))
    .unwrap();

    assert_eq!(before, GuardState::Authenticated);
    assert_eq!(before.advance(&recorder.state()), GuardState::Unauthenticated);
    assert_eq!(fake.calls(), vec!["sign_out".to_owned()]);
}
