//! Root application component with routing and context providers.
//!
//! Every route is wrapped in exactly one gate here; pages never nest gates
//! of their own.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::route_gate::{RequireAnonymous, RequireAuth};
use crate::config::ConsoleConfig;
use crate::pages::{cache::CachePage, dashboard::DashboardPage, login::LoginPage, sessions::SessionsPage};

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
/// Provides the console configuration and the auth context, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ConsoleConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RequireAnonymous><LoginPage/></RequireAnonymous> }
                    />
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("sessions")
                        view=|| view! { <RequireAuth><SessionsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("cache")
                        view=|| view! { <RequireAuth><CachePage/></RequireAuth> }
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
