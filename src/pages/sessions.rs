//! Sessions page: active sessions of the signed-in admin and a bulk
//! "sign out everywhere else" action.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use std::rc::Rc;

use leptos::prelude::*;
use time::{OffsetDateTime, UtcOffset};

use crate::config::ConsoleConfig;
use crate::net::sessions::SessionDirectory;
use crate::net::transport::HttpTransport;
use crate::net::types::Session;

fn revoke_summary(revoked: usize) -> String {
    match revoked {
        0 => "No other sessions were active.".to_owned(),
        1 => "Signed out 1 other session.".to_owned(),
        n => format!("Signed out {n} other sessions."),
    }
}

fn format_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    format!(
        "{}-{:02}-{:02} {:02}:{:02} UTC",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute()
    )
}

#[component]
pub fn SessionsPage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let directory = StoredValue::new_local(Rc::new(SessionDirectory::new(HttpTransport::new(config))));
    let sessions = RwSignal::new(Vec::<Session>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let refresh = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let directory = directory.get_value();
            leptos::task::spawn_local(async move {
                match directory.list_sessions().await {
                    Ok(envelope) => {
                        sessions.set(envelope.map(|listing| listing.sessions).data.unwrap_or_default());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (directory, sessions, error);
        }
    };
    refresh();

    let on_revoke = move |_| {
        notice.set(None);
        #[cfg(feature = "hydrate")]
        {
            let directory = directory.get_value();
            leptos::task::spawn_local(async move {
                match directory.revoke_all_other_sessions().await {
                    Ok(envelope) => {
                        let revoked = envelope.data.map_or(0, |r| r.sessions_revoked);
                        notice.set(Some(revoke_summary(revoked)));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                refresh();
            });
        }
    };

    view! {
        <div class="sessions-page">
            <header class="sessions-page__header">
                <a href="/" class="sessions-page__back">"Dashboard"</a>
                <h1>"Active Sessions"</h1>
                <button class="btn btn--danger" on:click=on_revoke disabled=move || loading.get()>
                    "Sign out all other sessions"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="sessions-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="sessions-page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading sessions..."</p> }>
                <table class="sessions-page__table">
                    <thead>
                        <tr>
                            <th>"Device"</th>
                            <th>"IP address"</th>
                            <th>"Signed in"</th>
                            <th>"Expires"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || sessions.get()
                            key=|session| session.id.clone()
                            children=move |session: Session| {
                                let row_class = if session.is_current {
                                    "sessions-page__row sessions-page__row--current"
                                } else {
                                    "sessions-page__row"
                                };
                                view! {
                                    <tr class=row_class title=session.user_agent.clone()>
                                        <td>{session.device_info.clone()}</td>
                                        <td>{session.ip_address.clone()}</td>
                                        <td>{format_timestamp(session.created_at)}</td>
                                        <td>{format_timestamp(session.expires_at)}</td>
                                        <td>{session.is_current.then_some("This browser")}</td>
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
