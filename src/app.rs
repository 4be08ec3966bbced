//! Root application component with routing and the session context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    create_data_request::CreateDataRequestPage, data_requests::DataRequestsPage, login::LoginPage,
    logout::LogoutPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context for the whole route tree and kicks off the
/// one-per-lifetime session resolution. The server render leaves the session
/// in its loading state; the browser resolves it after hydration, and any
/// response landing after a navigation is applied idempotently rather than
/// cancelled.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::resolve_session(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/datadesk-client.css"/>
        <Title text="Data Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <DataRequestsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("data-requests"), StaticSegment("new"))
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <CreateDataRequestPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
