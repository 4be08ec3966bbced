use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        is_active: true,
        is_superuser: false,
        is_verified: true,
    }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn sessions_start_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn anonymous_is_settled_without_identity() {
    let state = AuthState::anonymous();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_is_settled_with_identity() {
    let state = AuthState::authenticated(sample_user());
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().email, "a@b.com");
}

// =============================================================
// Session operations
// =============================================================

// Drive a future that is expected to finish without suspending. The no-token
// resolution path settles before its first await point, so a single poll is
// enough.
fn poll_once<F: Future<Output = ()>>(future: F) -> Option<()> {
    let mut future = std::pin::pin!(future);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match future.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(()) => Some(()),
        std::task::Poll::Pending => None,
    }
}

#[test]
fn logout_clears_an_authenticated_session() {
    let auth = RwSignal::new(AuthState::authenticated(sample_user()));
    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
}

#[test]
fn logout_when_already_anonymous_stays_anonymous() {
    let auth = RwSignal::new(AuthState::anonymous());
    logout(auth);
    logout(auth);
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
}

#[test]
fn resolve_session_without_token_settles_anonymous_immediately() {
    // Native builds have no storage, so no credential exists: resolution
    // must settle to anonymous before reaching the identity endpoint.
    let auth = RwSignal::new(AuthState::default());
    let settled = poll_once(resolve_session(auth));
    assert!(settled.is_some(), "no-token resolution must not suspend");
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
}
