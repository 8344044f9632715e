//! Dashboard page: the authenticated landing.

use leptos::prelude::*;

use crate::components::auth_provider::use_auth;
use crate::config::ConsoleConfig;
use crate::state::auth::AuthState;

/// Greets the admin and links to the admin tools.
/// Signing out clears the identity; the `RequireAuth` gate does the redirect.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let state = expect_context::<ReadSignal<AuthState>>();
    let config = expect_context::<ConsoleConfig>();

    let display_name = move || {
        state
            .get()
            .identity()
            .map(|admin| admin.username.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::transport::HttpTransport::new(config);
                if let Err(e) = crate::net::api::logout(&transport, transport.credential()).await {
                    log::warn!("logout request failed: {e}");
                }
                auth.set_identity(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth);
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Admin Console"</h1>
                <span class="dashboard-page__user">{display_name}</span>
                <button class="btn" on:click=on_logout disabled=move || !state.get().is_signed_in()>
                    "Sign out"
                </button>
            </header>
            <nav class="dashboard-page__links">
                <a href="/sessions" class="dashboard-page__link">"Sessions"</a>
                <a href="/cache" class="dashboard-page__link">"Cache"</a>
            </nav>
        </div>
    }
}
