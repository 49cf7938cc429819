//! Route guard wrapping the routed app shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluates the pure guard decision on every path or session change and
//! applies redirects. Pages stay unaware of authorization; they only consume
//! the shared session signal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingScreen;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardVerdict};

/// Applies the navigation-guard verdict for the current path.
///
/// While the session check is in flight, a neutral loading screen replaces
/// the children so gated content never flashes. Redirects are only issued
/// when the verdict says so; `evaluate` already collapses a redirect to the
/// current path into `Allow`, so no loop is possible.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        if let GuardVerdict::Redirect(target) = guard::evaluate(&session.get(), &path) {
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        {move || {
            if session.get().is_loading() {
                view! { <LoadingScreen/> }.into_any()
            } else {
                children()
            }
        }}
    }
}
