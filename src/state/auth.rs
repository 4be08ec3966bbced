//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided from the app root and read by the
//! route guard and user-aware components. All session mutation goes through
//! the operations here: resolution on startup, `login`, and `logout`. The
//! stored bearer token is the source of truth; the identity it yields is
//! re-derived from the server, never persisted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::User;
use crate::util::token;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true from creation until the first session resolution
/// settles, so guards can never mistake a not-yet-resolved session for an
/// anonymous one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Settled state with no identity.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// Settled state carrying a resolved identity.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Whether a resolved identity is present. Meaningful once `loading`
    /// is false; while loading it only reflects the not-yet-settled value.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Access the app-wide auth signal.
///
/// # Panics
///
/// Panics when called outside the context provided by [`crate::app::App`].
/// That is a wiring defect in the component tree, not a runtime condition,
/// so it fails fast rather than degrading to an anonymous default.
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>()
        .expect("use_auth must be called from within the App auth context")
}

/// Resolve the stored credential into an identity.
///
/// With no stored token this settles to anonymous immediately, without a
/// network call. Otherwise the identity endpoint decides: a parsed 2xx body
/// authenticates the session, and any failure (unauthorized, network, parse)
/// discards the now-useless token and settles to anonymous. Every path
/// terminates `loading`.
pub async fn resolve_session(auth: RwSignal<AuthState>) {
    if token::get_token().is_none() {
        auth.set(AuthState::anonymous());
        return;
    }
    match api::fetch_current_user().await {
        Some(user) => auth.set(AuthState::authenticated(user)),
        None => {
            token::remove_token();
            auth.set(AuthState::anonymous());
        }
    }
}

/// Exchange credentials for a token, store it, and re-resolve the session
/// so the identity reflects the fresh token. Returns whether login
/// succeeded; on failure nothing is stored and the session stays anonymous.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> bool {
    match api::request_access_token(email, password).await {
        Ok(access_token) => {
            token::set_token(&access_token);
            resolve_session(auth).await;
            true
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("login rejected: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            false
        }
    }
}

/// Drop the stored credential and clear the identity. No network call is
/// involved; logging out an already-anonymous session is a no-op.
pub fn logout(auth: RwSignal<AuthState>) {
    token::remove_token();
    auth.set(AuthState::anonymous());
}
