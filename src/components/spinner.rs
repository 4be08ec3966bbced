//! Centered loading spinner used as the pending placeholder.

use leptos::prelude::*;

/// Full-height centered spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" aria-label="Loading"></div>
        </div>
    }
}
