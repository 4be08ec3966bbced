//! Logout page: clears the session on mount and leaves for `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::{logout, use_auth};

/// Visiting `/logout` is the logout action: drop the credential, clear the
/// identity, and replace the current history entry with the login page.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        logout(auth);
        let mut options = NavigateOptions::default();
        options.replace = true;
        navigate("/login", options);
    });

    view! { <Spinner/> }
}
