//! Prediction page: patient features in, outcome scores out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inference runs on the ML backend; this page validates the form, posts to
//! `/nn/{model}`, and renders the predicted IKDC/Lysholm trajectory plus
//! feature-importance weights.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use leptos::prelude::*;

use crate::net::types::{ModelRecord, PredictionRequest, PredictionResponse};
use crate::state::ui::UiState;

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FeatureForm {
    hn: String,
    sex: String,
    age: String,
    ud: String,
    bw: String,
    ht: String,
    bmi: String,
    ikdc: String,
    lysholm: String,
    kl_grade: String,
    mm_extrusion: String,
}

fn parse_number(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a number"))
}

/// Validate and convert the form into a backend request.
fn parse_features(form: &FeatureForm) -> Result<PredictionRequest, String> {
    let hn = form.hn.trim();
    if hn.is_empty() {
        return Err("Enter the patient HN.".to_owned());
    }
    let sex = form.sex.trim();
    if sex.is_empty() {
        return Err("Enter the patient sex.".to_owned());
    }
    let kl_grade = form
        .kl_grade
        .trim()
        .parse::<u8>()
        .map_err(|_| "KL grade must be a whole number".to_owned())?;
    if kl_grade > 4 {
        return Err("KL grade must be between 0 and 4".to_owned());
    }
    Ok(PredictionRequest {
        hn: hn.to_owned(),
        sex: sex.to_owned(),
        age: parse_number("Age", &form.age)?,
        ud: form.ud.trim().to_owned(),
        bw: parse_number("Body weight", &form.bw)?,
        ht: parse_number("Height", &form.ht)?,
        bmi: parse_number("BMI", &form.bmi)?,
        ikdc: parse_number("Pre-op IKDC", &form.ikdc)?,
        lysholm: parse_number("Pre-op Lysholm", &form.lysholm)?,
        kl_grade,
        mm_extrusion: parse_number("MM extrusion", &form.mm_extrusion)?,
    })
}

/// Importance bar width for a normalized weight.
fn importance_percent(weight: f64) -> f64 {
    (weight.clamp(0.0, 1.0) * 100.0).round()
}

#[component]
pub fn PredictionPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let models = RwSignal::new(Vec::<ModelRecord>::new());
    let selected_model = RwSignal::new(String::new());
    let result = RwSignal::new(None::<PredictionResponse>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let hn = RwSignal::new(String::new());
    let sex = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let ud = RwSignal::new(String::new());
    let bw = RwSignal::new(String::new());
    let ht = RwSignal::new(String::new());
    let bmi = RwSignal::new(String::new());
    let ikdc = RwSignal::new(String::new());
    let lysholm = RwSignal::new(String::new());
    let kl_grade = RwSignal::new(String::new());
    let mm_extrusion = RwSignal::new(String::new());

    // Only active models are offered for inference.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_models().await {
            Ok(list) => models.set(list.into_iter().filter(|m| m.is_active).collect()),
            Err(e) => log::warn!("model list failed: {e}"),
        }
    });

    let on_predict = move |_| {
        if busy.get() {
            return;
        }
        let model = selected_model.get();
        if model.is_empty() {
            error.set("Select a model first.".to_owned());
            return;
        }
        let form = FeatureForm {
            hn: hn.get(),
            sex: sex.get(),
            age: age.get(),
            ud: ud.get(),
            bw: bw.get(),
            ht: ht.get(),
            bmi: bmi.get(),
            ikdc: ikdc.get(),
            lysholm: lysholm.get(),
            kl_grade: kl_grade.get(),
            mm_extrusion: mm_extrusion.get(),
        };
        let request = match parse_features(&form) {
            Ok(request) => request,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::predict(&model, &request).await {
                Ok(response) => {
                    result.set(Some(response));
                    ui.update(|state| state.notify_success("Prediction successful"));
                }
                Err(e) => {
                    log::warn!("prediction failed: {e}");
                    ui.update(|state| state.notify_error("Prediction failed"));
                    result.set(None);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (model, request, result, ui);
        }
    };

    view! {
        <div class="prediction-page">
            <section class="prediction-page__input">
                <h2>"Input"</h2>
                <div class="prediction-page__columns">
                    <div>
                        <h3>"Patient Information"</h3>
                        <FeatureInput label="HN" value=hn/>
                        <FeatureInput label="Sex" value=sex/>
                        <FeatureInput label="Age" value=age/>
                        <FeatureInput label="Underlying Disease" value=ud/>
                        <FeatureInput label="Body Weight (kg)" value=bw/>
                        <FeatureInput label="Height (cm)" value=ht/>
                        <FeatureInput label="BMI" value=bmi/>
                    </div>
                    <div>
                        <h3>"Pre Score"</h3>
                        <FeatureInput label="IKDC" value=ikdc/>
                        <FeatureInput label="Lysholm" value=lysholm/>
                        <FeatureInput label="KL Grade" value=kl_grade/>
                        <FeatureInput label="MM Extrusion" value=mm_extrusion/>
                    </div>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="prediction-page__error">{move || error.get()}</p>
                </Show>
                <button
                    class="btn btn--primary prediction-page__confirm"
                    disabled=move || busy.get()
                    on:click=on_predict
                >
                    "Confirm"
                </button>
            </section>

            <section class="prediction-page__output">
                <h2>"Prediction"</h2>
                <select
                    class="prediction-page__model"
                    on:change=move |ev| selected_model.set(event_target_value(&ev))
                >
                    <option value="">"Select Model"</option>
                    {move || {
                        models
                            .get()
                            .into_iter()
                            .map(|model| {
                                let label = format!("{} ({})", model.name, model.created_at);
                                view! { <option value=model.name.clone()>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>

                {move || {
                    result.get().map(|response| {
                        view! {
                            <table class="prediction-page__table">
                                <thead>
                                    <tr>
                                        <th>"Follow-up"</th>
                                        <th>"IKDC"</th>
                                        <th>"Lysholm"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {response
                                        .points
                                        .iter()
                                        .map(|point| {
                                            view! {
                                                <tr>
                                                    <td>{point.horizon.clone()}</td>
                                                    <td>{format!("{:.1}", point.ikdc)}</td>
                                                    <td>{format!("{:.1}", point.lysholm)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                            <div class="prediction-page__importance">
                                <h3>"Feature Importance"</h3>
                                {response
                                    .feature_importance
                                    .iter()
                                    .map(|weight| {
                                        let width = format!("width: {}%", importance_percent(weight.weight));
                                        view! {
                                            <div class="importance-row">
                                                <span class="importance-row__label">{weight.feature.clone()}</span>
                                                <span class="importance-row__bar" style=width></span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </section>
        </div>
    }
}

/// Labeled text input bound to one form signal.
#[component]
fn FeatureInput(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <input
                class="field__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
