//! Route guard for views that require an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected page content and reacts to the session context: pending
//! resolution shows a spinner, a settled anonymous session is sent to
//! `/login`, and a settled authenticated session renders the content. The
//! guard holds no state of its own.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::{AuthState, use_auth};

/// What the guard does with the wrapped content for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Resolution pending; show the placeholder. Takes precedence over
    /// whatever identity value is currently in flight.
    Loading,
    /// Settled without an identity; leave for the login entry point.
    RedirectToLogin,
    /// Settled with an identity; render the protected content.
    Admit,
}

/// Decide loading/redirect/admit from the current session state.
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Loading
    } else if state.is_authenticated() {
        GuardDecision::Admit
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Navigate to `/login` whenever the session settles without an identity.
///
/// History is replaced rather than pushed so the back button cannot loop
/// into the guarded page after the redirect.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&auth.get()) == GuardDecision::RedirectToLogin {
            let mut options = NavigateOptions::default();
            options.replace = true;
            navigate("/login", options);
        }
    });
}

/// Gate wrapping protected route content.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show when=move || !auth.get().loading fallback=|| view! { <Spinner/> }>
            // Clone the children handle per render: the outer `Show` re-runs
            // this block, so it must not move `children` out of its closure.
            {
                let children = children.clone();
                view! {
                    <Show when=move || auth.get().is_authenticated() fallback=|| ()>
                        {children()}
                    </Show>
                }
            }
        </Show>
    }
}
