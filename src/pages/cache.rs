//! Cache page: server cache statistics and a full clear.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::net::cache::CacheAdmin;
use crate::net::transport::HttpTransport;
use crate::net::types::CacheStats;

fn stat_rows(stats: &CacheStats) -> Vec<(String, String)> {
    stats
        .display_rows()
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

fn clear_notice(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        "Cache cleared.".to_owned()
    } else {
        message.to_owned()
    }
}

#[component]
pub fn CachePage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let admin = StoredValue::new_local(Rc::new(CacheAdmin::new(HttpTransport::new(config))));
    let rows = RwSignal::new(Vec::<(String, String)>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let refresh = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let admin = admin.get_value();
            leptos::task::spawn_local(async move {
                match admin.get_stats().await {
                    Ok(envelope) => {
                        rows.set(envelope.data.as_ref().map(stat_rows).unwrap_or_default());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (admin, rows, error);
        }
    };
    refresh();

    let on_clear = move |_| {
        notice.set(None);
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Clear the entire server cache?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let admin = admin.get_value();
            leptos::task::spawn_local(async move {
                match admin.clear_all().await {
                    Ok(envelope) => {
                        notice.set(Some(clear_notice(&envelope.message)));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                refresh();
            });
        }
    };

    view! {
        <div class="cache-page">
            <header class="cache-page__header">
                <a href="/" class="cache-page__back">"Dashboard"</a>
                <h1>"Cache"</h1>
                <button class="btn" on:click=move |_| refresh() disabled=move || loading.get()>
                    "Refresh"
                </button>
                <button class="btn btn--danger" on:click=on_clear disabled=move || loading.get()>
                    "Clear cache"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="cache-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="cache-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading cache stats..."</p> }>
                <table class="cache-page__table">
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|(name, _)| name.clone()
                            children=move |(name, value): (String, String)| {
                                view! {
                                    <tr>
                                        <th scope="row">{name}</th>
                                        <td>{value}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
