//! Create-data-request form: pick a person and a request source.

#[cfg(test)]
#[path = "create_data_request_test.rs"]
mod create_data_request_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::net::types::{NewDataRequest, Person, RequestSource};

fn validate_selection(
    person_id: Option<i64>,
    request_source_id: &str,
) -> Result<NewDataRequest, &'static str> {
    let person_id = person_id.ok_or("Select a person first.")?;
    if request_source_id.is_empty() {
        return Err("Select a request source first.");
    }
    Ok(NewDataRequest {
        person_id,
        request_source_id: request_source_id.to_owned(),
    })
}

fn parse_person_selection(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// New-request form. Both dropdowns load on mount; submit posts the request
/// and returns to the list. Load or submit failures surface inline.
#[component]
pub fn CreateDataRequestPage() -> impl IntoView {
    let people = RwSignal::new(Vec::<Person>::new());
    let sources = RwSignal::new(Vec::<RequestSource>::new());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let person_id = RwSignal::new(None::<i64>);
    let source_id = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = async {
            people.set(crate::net::api::fetch_people().await?);
            sources.set(crate::net::api::fetch_request_sources().await?);
            Ok::<(), String>(())
        }
        .await;
        if let Err(message) = loaded {
            error.set(Some(message));
        }
        loading.set(false);
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match validate_selection(person_id.get(), &source_id.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_data_request(&payload).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let person_options = move || {
        people
            .get()
            .into_iter()
            .map(|person| {
                view! {
                    <option value=person.id.to_string()>
                        {format!("{} ({})", person.full_name(), person.date_of_birth)}
                    </option>
                }
            })
            .collect_view()
    };

    let source_options = move || {
        sources
            .get()
            .into_iter()
            .map(|source| view! { <option value=source.id.clone()>{source.name.clone()}</option> })
            .collect_view()
    };

    let submit_disabled =
        move || submitting.get() || person_id.get().is_none() || source_id.get().is_empty();

    view! {
        <div class="page page--narrow">
            <h1>"New Data Request"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <Spinner/> }>
                <form class="form" on:submit=on_submit.clone()>
                    <label class="form__label" for="person">"Person"</label>
                    <select
                        id="person"
                        class="form__select"
                        on:change=move |ev| {
                            person_id.set(parse_person_selection(&event_target_value(&ev)));
                        }
                    >
                        <option value="">"Select a person"</option>
                        {person_options}
                    </select>

                    <label class="form__label" for="request-source">"Request Source"</label>
                    <select
                        id="request-source"
                        class="form__select"
                        on:change=move |ev| source_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a request source"</option>
                        {source_options}
                    </select>

                    <div class="form__actions">
                        <button class="button" type="submit" disabled=submit_disabled>
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                        <a class="button button--outline" href="/">
                            "Cancel"
                        </a>
                    </div>
                </form>
            </Show>
        </div>
    }
}
