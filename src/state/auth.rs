//! Auth-session state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route gates and identity-aware pages to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! `AuthStore::new` hands out exactly one `AuthWriter` and any number of
//! `AuthReader`s. Listeners run synchronously on every write, in the order
//! they subscribed, and always see the latest state: if a listener's reaction
//! causes a newer write, delivery of the older state stops. Dropping a
//! `Subscription` detaches its listener immediately, including in the middle
//! of a delivery round.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::net::types::AdminIdentity;

/// Whether the startup credential check has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Identity unknown; the check is still running.
    #[default]
    Initializing,
    /// Identity known, possibly known to be absent.
    Resolved,
}

/// Authentication state: phase plus the identity, if any.
///
/// Fields are private so an `Initializing` state can never carry an identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    phase: AuthPhase,
    identity: Option<AdminIdentity>,
}

impl AuthState {
    #[must_use]
    pub const fn initializing() -> Self {
        Self { phase: AuthPhase::Initializing, identity: None }
    }

    #[must_use]
    pub const fn resolved(identity: Option<AdminIdentity>) -> Self {
        Self { phase: AuthPhase::Resolved, identity }
    }

    #[must_use]
    pub const fn phase(&self) -> AuthPhase {
        self.phase
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AdminIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.phase, AuthPhase::Resolved)
    }

    /// Resolved with an identity present.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.is_resolved() && self.identity.is_some()
    }
}

type Listener = Rc<dyn Fn(&AuthState)>;

struct Inner {
    state: AuthState,
    version: u64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Inner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Constructor for the writer/reader pair.
pub struct AuthStore;

impl AuthStore {
    /// A fresh store in the `Initializing` phase.
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (AuthWriter, AuthReader) {
        let inner = Rc::new(RefCell::new(Inner {
            state: AuthState::initializing(),
            version: 0,
            next_id: 0,
            listeners: Vec::new(),
        }));
        (AuthWriter { inner: Rc::clone(&inner) }, AuthReader { inner })
    }
}

/// The single write handle. Not `Clone`.
pub struct AuthWriter {
    inner: Rc<RefCell<Inner>>,
}

impl AuthWriter {
    /// Move to `Resolved` with the given identity and notify listeners.
    ///
    /// There is no way back to `Initializing`.
    pub fn publish(&self, identity: Option<AdminIdentity>) {
        let (version, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.state = AuthState::resolved(identity);
            inner.version += 1;
            (inner.version, inner.listeners.clone())
        };
        for (id, listener) in snapshot {
            let current = {
                let inner = self.inner.borrow();
                if inner.version != version {
                    // A newer write already notified everyone.
                    return;
                }
                if !inner.is_subscribed(id) {
                    continue;
                }
                inner.state.clone()
            };
            listener(&current);
        }
    }

    #[must_use]
    pub fn get(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    #[must_use]
    pub fn reader(&self) -> AuthReader {
        AuthReader { inner: Rc::clone(&self.inner) }
    }
}

/// Read handle shared by gates and pages.
#[derive(Clone)]
pub struct AuthReader {
    inner: Rc<RefCell<Inner>>,
}

impl AuthReader {
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    /// Register a listener for every future write.
    ///
    /// The listener stays attached until the returned `Subscription` drops.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription { inner: Rc::downgrade(&self.inner), id }
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Keeps a listener attached; detaches it on drop.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
