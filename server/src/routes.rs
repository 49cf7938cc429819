//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the API reverse proxy and the Leptos SSR renderer under a single
//! axum router: `/api/*` and `/nn/*` go to the ML backend, everything else
//! renders the dashboard app itself.

use axum::Router;
use axum::routing::{any, get};
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let routes = generate_route_list(client::app::App);

    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/nn/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .leptos_routes(&state, routes, {
            let options = state.leptos_options.clone();
            move || client::app::shell(options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(
            client::app::shell,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
