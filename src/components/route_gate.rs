//! Route gate components.
//!
//! `RouteGate` mounts a `GateController` for the lifetime of the component
//! and mirrors its render slot into a signal. `RequireAuth` and
//! `RequireAnonymous` only pick the policy.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_provider::use_auth;
use crate::config::ConsoleConfig;
use crate::state::gate::{GateController, GatePolicy, Navigator, RenderSlot};

/// `Navigator` over the router's navigate function.
///
/// The router call runs in a spawned local task so it never happens while a
/// view is being built. History is replaced, not pushed, so the back button
/// does not land on a page that immediately redirects again.
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F> {
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate_to(&self, path: &str) {
        let navigate = self.navigate.clone();
        let path = path.to_owned();
        leptos::task::spawn_local(async move {
            navigate(
                &path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        });
    }
}

/// Renders `children` only while `policy` admits the current identity.
#[component]
pub fn RouteGate(
    policy: GatePolicy,
    /// Shown while auth is initializing. Defaults to a neutral loading line.
    #[prop(optional, into)]
    placeholder: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::new(use_navigate()));

    let slot = RwSignal::new(RenderSlot::Placeholder);
    let controller = GateController::mount(policy, &auth.reader(), navigator, move |next| slot.set(next));
    slot.set(controller.slot());
    // Disposed with this component's owner, which detaches the gate.
    let _controller = StoredValue::new_local(controller);

    move || match slot.get() {
        RenderSlot::Placeholder => placeholder.as_ref().map_or_else(loading_placeholder, ViewFn::run),
        RenderSlot::Children => children().into_any(),
        RenderSlot::Nothing => ().into_any(),
    }
}

/// Gate for pages that need a signed-in admin.
#[component]
pub fn RequireAuth(#[prop(optional, into)] placeholder: Option<ViewFn>, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    RouteGate(RouteGateProps {
        policy: GatePolicy::require_auth(&config),
        placeholder,
        children,
    })
}

/// Gate for pages only anonymous visitors should see (login).
#[component]
pub fn RequireAnonymous(#[prop(optional, into)] placeholder: Option<ViewFn>, children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    RouteGate(RouteGateProps {
        policy: GatePolicy::require_anonymous(&config),
        placeholder,
        children,
    })
}

fn loading_placeholder() -> AnyView {
    view! { <div class="route-gate__loading" aria-busy="true">"Loading..."</div> }.into_any()
}
