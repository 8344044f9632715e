//! Root component owning the console's auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above the router. Provides an `AuthContext` handle (write
//! access through `set_identity`, reader for gates) and a read-only
//! `ReadSignal<AuthState>` mirror for identity-aware pages, then kicks off
//! the startup credential check in the browser.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::net::types::AdminIdentity;
use crate::state::auth::AuthReader;
use crate::state::provider::AuthStateProvider;

/// Context handle onto the single `AuthStateProvider`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    provider: StoredValue<Rc<AuthStateProvider>, LocalStorage>,
}

impl AuthContext {
    #[must_use]
    pub fn reader(&self) -> AuthReader {
        self.provider.with_value(|p| p.reader())
    }

    /// Publish a login (`Some`) or logout (`None`).
    pub fn set_identity(&self, identity: Option<AdminIdentity>) {
        self.provider.with_value(|p| p.set_identity(identity));
    }
}

/// The auth handle provided by the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let provider = Rc::new(AuthStateProvider::new());
    let reader = provider.reader();

    let snapshot = RwSignal::new(reader.get());
    let mirror = reader.subscribe(move |state| snapshot.set(state.clone()));
    let _mirror = StoredValue::new_local(mirror);

    provide_context(AuthContext { provider: StoredValue::new_local(Rc::clone(&provider)) });
    provide_context(snapshot.read_only());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::transport::HttpTransport::new(config.clone());
        provider.resolve(|| check_stored_credential(&transport, &config)).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        // The server never learns the identity; gates render placeholders.
        let _ = (config, provider);
    }

    children()
}

/// Credential check bounded by the configured timeout, if any.
#[cfg(feature = "hydrate")]
async fn check_stored_credential(
    transport: &crate::net::transport::HttpTransport,
    config: &ConsoleConfig,
) -> Result<Option<AdminIdentity>, crate::error::ResolutionFailure> {
    use crate::error::ResolutionFailure;
    use crate::util::timeout::{race_deadline, sleep};

    let check = crate::net::api::resolve_identity(transport, transport.credential());
    match config.resolve_timeout {
        Some(limit) => {
            let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
            race_deadline(check, sleep(limit))
                .await
                .unwrap_or(Err(ResolutionFailure::TimedOut(millis)))
        }
        None => check.await,
    }
}
