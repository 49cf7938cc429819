//! Registration page for new research accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::ui::UiState;

const MIN_PASSWORD_LEN: usize = 8;

/// Trim the username and enforce the minimum password length.
fn validate_registration(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Choose a username.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_registration(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&username_value, &password_value).await {
                    Ok(()) => {
                        ui.update(|state| state.notify_success("Account created. Please sign in."));
                        navigate(
                            crate::util::route::LOGIN,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        error.set("Error creating account".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ui, &navigate, username_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
