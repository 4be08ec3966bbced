//! Data requests list: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows requests filtered by workflow status, with tabs for the statuses
//! reviewers work through. Refetches whenever the filter changes; fetch
//! failures surface inline and are not retried automatically.

#[cfg(test)]
#[path = "data_requests_test.rs"]
mod data_requests_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::types::{
    DataRequest, STATUS_COMPLETE, STATUS_NEEDS_REVIEW, STATUS_PROCESSING, status_label,
};

/// Status tabs shown on the list page, in display order.
const STATUS_TABS: [i64; 3] = [STATUS_PROCESSING, STATUS_NEEDS_REVIEW, STATUS_COMPLETE];

fn status_display(status: i64) -> String {
    status_label(status).map_or_else(|| status.to_string(), ToOwned::to_owned)
}

/// Date portion of an ISO datetime string, for table display.
fn display_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn request_display_name(request: &DataRequest) -> String {
    format!("{} {}", request.first_name, request.last_name)
}

/// Data requests table with status-filter tabs and a create link.
#[component]
pub fn DataRequestsPage() -> impl IntoView {
    let requests = RwSignal::new(Vec::<DataRequest>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Reviewers land on the queue that needs them.
    let status = RwSignal::new(STATUS_NEEDS_REVIEW);

    // Refetch on mount and on every tab change.
    Effect::new(move || {
        let status_value = status.get();
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_data_requests(status_value).await {
                Ok(rows) => requests.set(rows),
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = status_value;
    });

    let tab = move |code: i64| {
        view! {
            <button
                class=move || {
                    if status.get() == code { "tab tab--active" } else { "tab" }
                }
                on:click=move |_| status.set(code)
            >
                {status_display(code)}
            </button>
        }
    };

    let rows = move || {
        requests
            .get()
            .into_iter()
            .map(|request| {
                view! {
                    <tr>
                        <td>{request.id}</td>
                        <td>{request_display_name(&request)}</td>
                        <td>{status_display(request.status)}</td>
                        <td>{display_date(&request.created_on).to_owned()}</td>
                        <td>{request.created_by.clone()}</td>
                        <td>{request.request_source_id.clone()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <h1>"Data Requests"</h1>
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    view! {
                        <p class="page__error">
                            {move || format!("Error: {}", error.get().unwrap_or_default())}
                        </p>
                    }
                }
            >
                <div class="page__toolbar">
                    <div class="tabs">{STATUS_TABS.into_iter().map(tab).collect_view()}</div>
                    <a class="button" href="/data-requests/new">
                        "New Data Request"
                    </a>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Created On"</th>
                            <th>"Created By"</th>
                            <th>"Request Source"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !loading.get()
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td colspan="6"><Spinner/></td>
                                    </tr>
                                }
                            }
                        >
                            {rows}
                        </Show>
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
