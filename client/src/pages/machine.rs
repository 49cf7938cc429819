//! Model management page: list, filter, train, edit, delete, download.
//!
//! SYSTEM CONTEXT
//! ==============
//! Training and storage happen on the ML backend; this page only uploads the
//! training CSV, kicks off a run, and curates metadata. New-model creation is
//! a two-step flow: upload the CSV for a `csv_id`, then request training
//! against it.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use leptos::prelude::*;

use crate::net::types::{CsvUpload, ModelRecord, ModelUpdate, TrainRequest};
use crate::state::ui::UiState;

/// Architectures the backend knows how to train.
const ARCHITECTURES: [&str; 3] = ["mlp", "gbdt", "linear"];

/// Case-insensitive filter over name, architecture, version, and date.
fn filter_models(models: &[ModelRecord], query: &str) -> Vec<ModelRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return models.to_vec();
    }
    models
        .iter()
        .filter(|model| {
            model.name.to_lowercase().contains(&query)
                || model.model_architecture.to_lowercase().contains(&query)
                || model.version.to_lowercase().contains(&query)
                || model.created_at.contains(&query)
        })
        .cloned()
        .collect()
}

fn csv_download_name(model: &ModelRecord) -> String {
    format!("{}-training-data.csv", model.name)
}

fn final_loss_label(model: &ModelRecord) -> String {
    match model.final_loss {
        Some(loss) => format!("{loss:.4}"),
        None => "n/a".to_owned(),
    }
}

/// Require a name and an already-read CSV before training starts.
fn validate_new_model(name: &str, has_csv: bool) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a model name.");
    }
    if !has_csv {
        return Err("Choose a training CSV first.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn MachinePage() -> impl IntoView {
    let models = RwSignal::new(Vec::<ModelRecord>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let filter = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<ModelRecord>);
    let delete_target = RwSignal::new(None::<ModelRecord>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_models().await {
            Ok(list) => models.set(list),
            Err(e) => {
                log::warn!("model list failed: {e}");
                load_error.set(Some("Failed to load models".to_owned()));
            }
        }
        loading.set(false);
    });

    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_edit_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let visible = move || filter_models(&models.get(), &filter.get());

    view! {
        <div class="machine-page">
            <div class="machine-page__toolbar">
                <h1>"Model Management"</h1>
                <span class="machine-page__spacer"></span>
                <input
                    class="machine-page__filter"
                    type="text"
                    placeholder="Filter"
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "Create New Model"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading models..."</p> }
            >
                <Show when=move || load_error.get().is_some()>
                    <p class="machine-page__error">
                        {move || load_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <ul class="machine-page__list">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|model| {
                                view! { <ModelRow model=model editing=editing delete_target=delete_target/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <Show when=move || show_create.get()>
                <TrainModelDialog models=models on_cancel=on_create_cancel/>
            </Show>
            {move || {
                editing.get().map(|model| {
                    view! { <EditModelDialog model=model models=models on_cancel=on_edit_cancel/> }
                })
            }}
            {move || {
                delete_target.get().map(|model| {
                    view! { <DeleteModelDialog model=model models=models on_cancel=on_delete_cancel/> }
                })
            }}
        </div>
    }
}

/// One model in the list, with its action buttons.
#[component]
fn ModelRow(
    model: ModelRecord,
    editing: RwSignal<Option<ModelRecord>>,
    delete_target: RwSignal<Option<ModelRecord>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let edit_snapshot = model.clone();
    let delete_snapshot = model.clone();
    let download_snapshot = model.clone();

    let on_download = move |_| {
        let model = download_snapshot.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::download_csv(model.csv_id).await {
                Ok(text) => {
                    crate::util::download::save_text_file(&csv_download_name(&model), &text, "text/csv");
                }
                Err(e) => {
                    log::warn!("csv download failed: {e}");
                    ui.update(|state| state.notify_error("Failed to download CSV"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (model, ui);
        }
    };

    view! {
        <li class="model-row">
            <span class="model-row__name">{model.name.clone()}</span>
            <span class="model-row__arch">{model.model_architecture.clone()}</span>
            <span class="model-row__date">{model.created_at.clone()}</span>
            <span class="model-row__version">{model.version.clone()}</span>
            <span class="model-row__loss">{final_loss_label(&model)}</span>
            <span class="model-row__status">
                {if model.is_active { "Active" } else { "Inactive" }}
            </span>
            <span class="model-row__actions">
                <button class="btn" on:click=on_download>
                    "Download CSV"
                </button>
                <button class="btn" on:click=move |_| editing.set(Some(edit_snapshot.clone()))>
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
}

/// Modal dialog for uploading a CSV and starting a training run.
#[component]
fn TrainModelDialog(models: RwSignal<Vec<ModelRecord>>, on_cancel: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let architecture = RwSignal::new(ARCHITECTURES[0].to_owned());
    let csv = RwSignal::new(None::<(String, String)>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let filename = file.name();
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                    Ok(value) => {
                        if let Some(text) = value.as_string() {
                            csv.set(Some((filename, text)));
                        }
                    }
                    Err(_) => {
                        log::warn!("failed to read selected file");
                        ui.update(|state| state.notify_error("Could not read the selected file"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, csv, ui);
        }
    };

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let model_name = match validate_new_model(&name.get(), csv.get().is_some()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let model_architecture = architecture.get();
            let (filename, content) = csv.get().unwrap_or_default();
            leptos::task::spawn_local(async move {
                let upload = CsvUpload { filename, content };
                let uploaded = match crate::net::api::upload_csv(&upload).await {
                    Ok(response) => response,
                    Err(e) => {
                        log::warn!("csv upload failed: {e}");
                        ui.update(|state| state.notify_error("Failed to upload CSV"));
                        busy.set(false);
                        return;
                    }
                };
                let request = TrainRequest {
                    name: model_name,
                    model_architecture,
                    csv_id: uploaded.csv_id,
                };
                match crate::net::api::train_model(&request).await {
                    Ok(record) => {
                        models.update(|list| list.push(record));
                        ui.update(|state| state.notify_success("Model training started"));
                        on_cancel.run(());
                    }
                    Err(e) => {
                        log::warn!("model training failed: {e}");
                        ui.update(|state| state.notify_error("Failed to start training"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (model_name, models, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Model"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Model Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Architecture"
                        <select
                            class="dialog__input"
                            on:change=move |ev| architecture.set(event_target_value(&ev))
                        >
                            {ARCHITECTURES
                                .into_iter()
                                .map(|arch| view! { <option value=arch>{arch}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Training CSV"
                        <input class="dialog__input" type="file" accept=".csv" on:change=on_file_change/>
                    </label>
                    <Show when=move || csv.get().is_some()>
                        <p class="dialog__hint">
                            {move || csv.get().map(|(filename, _)| filename).unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="dialog__danger">{move || error.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Upload & Train"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Modal dialog for editing model metadata.
#[component]
fn EditModelDialog(
    model: ModelRecord,
    models: RwSignal<Vec<ModelRecord>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let model_id = model.id;

    let name = RwSignal::new(model.name.clone());
    let version = RwSignal::new(model.version.clone());
    let description = RwSignal::new(model.description.clone());
    let is_active = RwSignal::new(model.is_active);

    let submit = Callback::new(move |()| {
        let update = ModelUpdate {
            name: Some(name.get().trim().to_owned()),
            version: Some(version.get().trim().to_owned()),
            description: Some(description.get().trim().to_owned()),
            is_active: Some(is_active.get()),
        };
        if update.name.as_deref() == Some("") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_model(model_id, &update).await {
                Ok(updated) => {
                    models.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|m| m.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    ui.update(|state| state.notify_success("Model updated successfully"));
                    on_cancel.run(());
                }
                Err(e) => {
                    log::warn!("model update failed: {e}");
                    ui.update(|state| state.notify_error("Failed to update model"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, models, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Model"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Version"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || version.get()
                            on:input=move |ev| version.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
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

/// Confirmation dialog for deleting one model.
#[component]
fn DeleteModelDialog(
    model: ModelRecord,
    models: RwSignal<Vec<ModelRecord>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let model_id = model.id;

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_model(model_id).await {
                Ok(()) => {
                    models.update(|list| list.retain(|m| m.id != model_id));
                    ui.update(|state| state.notify_success("Model deleted"));
                }
                Err(e) => {
                    log::warn!("model delete failed: {e}");
                    ui.update(|state| state.notify_error("Failed to delete model"));
                }
            }
            on_cancel.run(());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (models, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Model"</h2>
                <p class="dialog__danger">
                    "This will permanently delete "
                    <strong>{model.name.clone()}</strong>
                    " and its training metadata."
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
