//! App header: brand, section links, and the account menu.
//!
//! Links are role-aware: the customers section only appears for admins, and
//! feature links only for signed-in viewers. Nothing here enforces access;
//! the route guard does that even when a viewer types a URL by hand.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = move || {
        session
            .get()
            .user()
            .map(|identity| identity.username.clone())
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        let navigate = navigate.clone();
        session::sign_out(session, ui, move |path| {
            navigate(path, NavigateOptions::default());
        });
    };

    view! {
        <header class="nav">
            <A href="/" attr:class="nav__brand">
                "MRT Outcome Dashboard"
            </A>

            <nav class="nav__links">
                <Show when=move || session.get().user().is_some()>
                    <A href="/machine">"Manage Models"</A>
                    <A href="/prediction">"Prediction"</A>
                </Show>
                <Show when=move || session.get().is_admin()>
                    <A href="/customers">"Customers"</A>
                </Show>
            </nav>

            <span class="nav__spacer"></span>

            <Show
                when=move || session.get().user().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || !session.get().is_loading()>
                            <span class="nav__account">
                                <A href="/login">"Sign In"</A>
                                <A href="/register">"Sign Up"</A>
                            </span>
                        </Show>
                    }
                }
            >
                <span class="nav__account">
                    <span class="nav__username">{username}</span>
                    <button class="btn nav__sign-out" on:click=on_sign_out.clone()>
                        "Sign Out"
                    </button>
                </span>
            </Show>
        </header>
    }
}
