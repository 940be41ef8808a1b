use futures::executor::block_on;

use super::*;
use crate::net::identity::AuthErrorReason;
use crate::testing::{FakeIdentity, Recorder, user};

#[test]
fn sign_out_clears_user_in_store() {
    let fake = FakeIdentity::new();
    let recorder = Recorder::new();
    let dispatch = recorder.dispatcher();
    dispatch(AuthAction::SessionObserved(Some(user("u1", "a@b.com"))));

    block_on(submit_sign_out(&fake, &dispatch)).unwrap();

    let state = recorder.state();
    assert_eq!(state.user, None);
    assert!(!state.loading);
    assert!(state.is_initialized);
}

#[test]
fn failed_sign_out_keeps_user() {
    let fake = FakeIdentity::new();
    fake.fail_sign_out(AuthError::network());
    let recorder = Recorder::new();
    let dispatch = recorder.dispatcher();
    dispatch(AuthAction::SessionObserved(Some(user("u1", "a@b.com"))));

    let err = block_on(submit_sign_out(&fake, &dispatch)).unwrap_err();

    assert_eq!(err.reason, AuthErrorReason::Network);
    let state = recorder.state();
    assert!(state.user.is_some());
    assert_eq!(state.error.as_deref(), Some(AuthErrorReason::Network.default_message()));
}
