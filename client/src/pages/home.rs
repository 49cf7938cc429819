//! Public landing page describing the research project.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Meniscus Root Tear Outcome Prediction"</h1>
                <p>
                    "Machine-learning models estimating post-operative IKDC and Lysholm "
                    "trajectories for meniscus root tear patients, built on the research "
                    "cohort's follow-up data."
                </p>
            </section>

            <section class="home-page__overview">
                <h2>"Understanding Meniscus Root Tear"</h2>
                <p>
                    "The meniscus is a fibrocartilaginous structure in the knee that "
                    "distributes load and stabilizes the joint. A root tear detaches the "
                    "meniscus from its tibial anchor, accelerating cartilage wear; "
                    "predicting which patients benefit from repair guides treatment."
                </p>
                <p>
                    "Models here are trained on pre-operative features: demographics, "
                    "BMI, Kellgren-Lawrence grade, meniscal extrusion, and baseline "
                    "IKDC/Lysholm scores."
                </p>
            </section>

            <section class="home-page__actions">
                <Show
                    when=move || session.get().user().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || !session.get().is_loading()>
                                <p>
                                    <A href="/login" attr:class="btn btn--primary">"Sign In"</A>
                                    " or "
                                    <A href="/register" attr:class="btn">"create an account"</A>
                                    " to manage models and run predictions."
                                </p>
                            </Show>
                        }
                    }
                >
                    <p>
                        <A href="/machine" attr:class="btn btn--primary">"Manage Models"</A>
                        <A href="/prediction" attr:class="btn">"Run a Prediction"</A>
                    </p>
                </Show>
            </section>
        </div>
    }
}
