//! Owner of the console's auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at the application root. Runs the startup credential check
//! once per page load and is the only writer of `AuthState`; login and
//! logout flows go through `set_identity`.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::Cell;
use std::future::Future;

use super::auth::{AuthReader, AuthState, AuthStore, AuthWriter};
use crate::error::ResolutionFailure;
use crate::net::types::AdminIdentity;

/// Progress of the startup credential check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    NotStarted,
    Pending,
    Settled,
}

/// Single writer of `AuthState`.
pub struct AuthStateProvider {
    writer: AuthWriter,
    resolution: Cell<Resolution>,
}

impl Default for AuthStateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStateProvider {
    #[must_use]
    pub fn new() -> Self {
        let (writer, _) = AuthStore::new();
        Self { writer, resolution: Cell::new(Resolution::NotStarted) }
    }

    #[must_use]
    pub fn reader(&self) -> AuthReader {
        self.writer.reader()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.writer.get()
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution.get()
    }

    /// Run the startup credential check and publish its outcome.
    ///
    /// Only the first call does anything; later or concurrent calls return
    /// `false` immediately without invoking `check`. Failures resolve to an
    /// absent identity. If `set_identity` ran while the check was pending,
    /// the explicit identity is kept and the check's outcome is dropped.
    pub async fn resolve<F, Fut>(&self, check: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<AdminIdentity>, ResolutionFailure>>,
    {
        if self.resolution.get() != Resolution::NotStarted {
            log::debug!("auth resolution already started");
            return false;
        }
        self.resolution.set(Resolution::Pending);

        let identity = match check().await {
            Ok(identity) => identity,
            Err(failure) => {
                log::warn!("auth resolution failed: {failure}");
                None
            }
        };
        self.resolution.set(Resolution::Settled);

        if self.writer.get().is_resolved() {
            log::debug!("auth already set explicitly; discarding startup check result");
        } else {
            log::info!(
                "auth resolved: {}",
                identity.as_ref().map_or("anonymous", |a| a.username.as_str())
            );
            self.writer.publish(identity);
        }
        true
    }

    /// Explicit login (`Some`) or logout (`None`). Always leaves the state
    /// `Resolved`.
    pub fn set_identity(&self, identity: Option<AdminIdentity>) {
        log::info!(
            "auth set: {}",
            identity.as_ref().map_or("anonymous", |a| a.username.as_str())
        );
        self.writer.publish(identity);
    }
}
