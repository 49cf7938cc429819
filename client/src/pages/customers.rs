//! Customers page: admin-only CRUD over research user accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only by admins (the route guard enforces this). The list is kept
//! in sync optimistically: updates and deletes patch the local list from the
//! server's response instead of re-fetching.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::prelude::*;

use crate::net::types::{UserAccount, UserAccountUpdate};
use crate::state::ui::UiState;

/// Build the partial update payload from the edit form.
///
/// A blank password means "leave unchanged" and is omitted entirely.
fn build_account_update(
    username: &str,
    password: &str,
    role: &str,
    is_active: bool,
) -> UserAccountUpdate {
    let password = password.trim();
    UserAccountUpdate {
        username: Some(username.trim().to_owned()),
        password: if password.is_empty() {
            None
        } else {
            Some(password.to_owned())
        },
        role: Some(role.trim().to_owned()),
        is_active: Some(is_active),
    }
}

/// Swap the server's updated record into the local list.
fn replace_account(accounts: &mut [UserAccount], updated: UserAccount) {
    if let Some(slot) = accounts.iter_mut().find(|account| account.id == updated.id) {
        *slot = updated;
    }
}

fn remove_account(accounts: &mut Vec<UserAccount>, id: i64) {
    accounts.retain(|account| account.id != id);
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let accounts = RwSignal::new(Vec::<UserAccount>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<UserAccount>);
    let delete_target = RwSignal::new(None::<UserAccount>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(list) => accounts.set(list),
            Err(e) => {
                log::warn!("account list failed: {e}");
                load_error.set(Some("Failed to load customers".to_owned()));
            }
        }
        loading.set(false);
    });

    let on_edit_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <div class="customers-page">
            <h1>"Customers"</h1>
            <p class="customers-page__subtitle">"View, update, and delete research accounts."</p>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show when=move || load_error.get().is_some()>
                    <p class="customers-page__error">
                        {move || load_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <ul class="customers-page__list">
                    {move || {
                        accounts
                            .get()
                            .into_iter()
                            .map(|account| {
                                let edit_snapshot = account.clone();
                                let delete_snapshot = account.clone();
                                view! {
                                    <li class="customer-row">
                                        <span class="customer-row__name">{account.username.clone()}</span>
                                        <span class="customer-row__role">{account.role.clone()}</span>
                                        <span class="customer-row__status">
                                            {if account.is_active { "Active" } else { "Inactive" }}
                                        </span>
                                        <span class="customer-row__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| editing.set(Some(edit_snapshot.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| delete_target.set(Some(delete_snapshot.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            {move || {
                editing.get().map(|account| {
                    view! {
                        <EditAccountDialog account=account accounts=accounts on_cancel=on_edit_cancel/>
                    }
                })
            }}
            {move || {
                delete_target.get().map(|account| {
                    view! {
                        <DeleteAccountDialog account=account accounts=accounts on_cancel=on_delete_cancel/>
                    }
                })
            }}
        </div>
    }
}

/// Modal dialog for editing one account.
#[component]
fn EditAccountDialog(
    account: UserAccount,
    accounts: RwSignal<Vec<UserAccount>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let account_id = account.id;

    let username = RwSignal::new(account.username.clone());
    // Never pre-filled; blank means keep the current password.
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(account.role.clone());
    let is_active = RwSignal::new(account.is_active);

    let submit = Callback::new(move |()| {
        let update = build_account_update(&username.get(), &password.get(), &role.get(), is_active.get());
        if update.username.as_deref() == Some("") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user(account_id, &update).await {
                Ok(updated) => {
                    accounts.update(|list| replace_account(list, updated));
                    ui.update(|state| state.notify_success("Customer updated successfully"));
                    on_cancel.run(());
                }
                Err(e) => {
                    log::warn!("account update failed: {e}");
                    ui.update(|state| state.notify_error("Failed to update customer"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, accounts, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Customer"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="Leave blank to keep unchanged"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Role"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || role.get()
                            on:input=move |ev| role.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting one account.
#[component]
fn DeleteAccountDialog(
    account: UserAccount,
    accounts: RwSignal<Vec<UserAccount>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let account_id = account.id;

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(account_id).await {
                Ok(()) => {
                    accounts.update(|list| remove_account(list, account_id));
                    ui.update(|state| state.notify_success("Customer deleted successfully"));
                }
                Err(e) => {
                    log::warn!("account delete failed: {e}");
                    ui.update(|state| state.notify_error("Failed to delete customer"));
                }
            }
            on_cancel.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (accounts, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Customer"</h2>
                <p class="dialog__danger">
                    "This will permanently delete the account for "
                    <strong>{account.username.clone()}</strong>
                    "."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
