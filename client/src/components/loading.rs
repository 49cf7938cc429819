//! Neutral loading placeholder shown while the session check is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p>"Loading..."</p>
        </div>
    }
}
