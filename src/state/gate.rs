//! Route gate state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page is wrapped in exactly one gate. The gate decides per
//! auth state whether to show a placeholder, the page, or nothing while a
//! redirect is in flight.
//!
//! DESIGN
//! ======
//! `RequireAuth` and `RequireAnonymous` are one machine parameterized by a
//! `GatePolicy` (admit predicate + redirect target). Redirects are returned
//! from `GateMachine::observe` as an effect instead of being performed while
//! rendering; `GateController` executes the effect through a `Navigator` and
//! then moves the machine to `Blocked`.
//!
//! A gate issues at most one navigation per mount. If it is still mounted
//! after redirecting, that navigation is still in flight, so a later redirect
//! to the same target is not re-issued.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::auth::{AuthReader, AuthState, Subscription};
use crate::config::ConsoleConfig;
use crate::net::types::AdminIdentity;

/// Navigation primitive supplied by the host.
///
/// Fire-and-forget: the target page is not assumed to be mounted when the
/// call returns.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Who a gate admits and where everyone else is sent.
#[derive(Clone, Debug)]
pub struct GatePolicy {
    name: &'static str,
    admit: fn(Option<&AdminIdentity>) -> bool,
    redirect_to: String,
}

impl GatePolicy {
    pub fn new(name: &'static str, admit: fn(Option<&AdminIdentity>) -> bool, redirect_to: impl Into<String>) -> Self {
        Self { name, admit, redirect_to: redirect_to.into() }
    }

    /// Admits signed-in admins; sends everyone else to the anonymous landing.
    #[must_use]
    pub fn require_auth(config: &ConsoleConfig) -> Self {
        Self::new("require-auth", |identity| identity.is_some(), config.anonymous_landing.clone())
    }

    /// Admits visitors without an identity; sends admins to the authenticated
    /// landing.
    #[must_use]
    pub fn require_anonymous(config: &ConsoleConfig) -> Self {
        Self::new("require-anonymous", |identity| identity.is_none(), config.authenticated_landing.clone())
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn admits(&self, identity: Option<&AdminIdentity>) -> bool {
        (self.admit)(identity)
    }

    #[must_use]
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }
}

/// Gate lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Auth still initializing.
    AwaitingResolution,
    /// Page content may render.
    Admitted,
    /// Navigation to the target is pending dispatch.
    Redirecting(String),
    /// Navigation dispatched; render nothing until the page goes away.
    Blocked,
}

/// What the host should render for a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderSlot {
    Placeholder,
    Children,
    Nothing,
}

/// Pure gate state machine.
#[derive(Debug)]
pub struct GateMachine {
    policy: GatePolicy,
    state: GateState,
    navigated: bool,
}

impl GateMachine {
    #[must_use]
    pub fn new(policy: GatePolicy) -> Self {
        Self { policy, state: GateState::AwaitingResolution, navigated: false }
    }

    #[must_use]
    pub fn state(&self) -> &GateState {
        &self.state
    }

    #[must_use]
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Children render only in `Admitted`.
    #[must_use]
    pub fn slot(&self) -> RenderSlot {
        match self.state {
            GateState::AwaitingResolution => RenderSlot::Placeholder,
            GateState::Admitted => RenderSlot::Children,
            GateState::Redirecting(_) | GateState::Blocked => RenderSlot::Nothing,
        }
    }

    /// Re-evaluate against `auth`. Returns the path to navigate to, if the
    /// caller must start a redirect now.
    pub fn observe(&mut self, auth: &AuthState) -> Option<String> {
        if !auth.is_resolved() {
            self.state = GateState::AwaitingResolution;
            return None;
        }
        if self.policy.admits(auth.identity()) {
            self.state = GateState::Admitted;
            return None;
        }
        match self.state {
            GateState::Redirecting(_) | GateState::Blocked => None,
            GateState::AwaitingResolution | GateState::Admitted if self.navigated => {
                self.state = GateState::Blocked;
                None
            }
            GateState::AwaitingResolution | GateState::Admitted => {
                let target = self.policy.redirect_to.clone();
                self.state = GateState::Redirecting(target.clone());
                Some(target)
            }
        }
    }

    /// The redirect effect has been handed to the navigator.
    pub fn navigation_dispatched(&mut self) {
        if matches!(self.state, GateState::Redirecting(_)) {
            self.state = GateState::Blocked;
            self.navigated = true;
        }
    }
}

/// A mounted gate: machine + auth subscription + navigator.
///
/// Dropping the controller unsubscribes, so an unmounted gate never sees
/// another auth update.
pub struct GateController {
    machine: Rc<RefCell<GateMachine>>,
    _subscription: Subscription,
}

impl GateController {
    /// Mount a gate, evaluate it against the current auth state, and follow
    /// every later change. `on_slot` runs whenever the render slot changes
    /// after mount; read [`Self::slot`] for the initial one.
    pub fn mount(
        policy: GatePolicy,
        auth: &AuthReader,
        navigator: Rc<dyn Navigator>,
        on_slot: impl Fn(RenderSlot) + 'static,
    ) -> Self {
        let machine = Rc::new(RefCell::new(GateMachine::new(policy)));
        step(&machine, navigator.as_ref(), &auth.get());

        let weak = Rc::downgrade(&machine);
        let subscription = auth.subscribe(move |state| {
            let Some(machine) = weak.upgrade() else {
                return;
            };
            let before = machine.borrow().slot();
            let after = step(&machine, navigator.as_ref(), state);
            if before != after {
                on_slot(after);
            }
        });

        Self { machine, _subscription: subscription }
    }

    #[must_use]
    pub fn slot(&self) -> RenderSlot {
        self.machine.borrow().slot()
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.machine.borrow().state().clone()
    }
}

fn step(machine: &RefCell<GateMachine>, navigator: &dyn Navigator, auth: &AuthState) -> RenderSlot {
    let redirect = machine.borrow_mut().observe(auth);
    if let Some(path) = redirect {
        log::info!("{} gate redirecting to {path}", machine.borrow().policy().name());
        navigator.navigate_to(&path);
        machine.borrow_mut().navigation_dispatched();
    }
    machine.borrow().slot()
}
