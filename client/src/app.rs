//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::NavBar;
use crate::components::notice::NoticeHost;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    customers::CustomersPage, home::HomePage, login::LoginPage, machine::MachinePage,
    prediction::PredictionPage, register::RegisterPage,
};
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, kicks off the initial session
/// check, and wraps every route in the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session_state);
    provide_context(ui);

    // Resolve the viewer once on mount; pages and the guard react to the result.
    session::refresh(session_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/mrt-dashboard.css"/>
        <Title text="MRT Outcome Dashboard"/>

        <Router>
            <NavBar/>
            <NoticeHost/>
            <RouteGuard>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("customers") view=CustomersPage/>
                        <Route path=StaticSegment("machine") view=MachinePage/>
                        <Route path=StaticSegment("prediction") view=PredictionPage/>
                    </Routes>
                </main>
            </RouteGuard>
        </Router>
    }
}
