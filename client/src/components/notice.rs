//! Dismissible notice banner (success/error notifications).

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};

/// Renders the current notice, if any, with a dismiss button.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().notice.is_some()>
            {move || {
                ui.get()
                    .notice
                    .map(|notice| {
                        let class = match notice.level {
                            NoticeLevel::Success => "notice notice--success",
                            NoticeLevel::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class role="status">
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| ui.update(UiState::dismiss)
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
