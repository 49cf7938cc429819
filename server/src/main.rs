mod config;
mod proxy;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("server configuration");
    let leptos_conf = leptos::config::get_configuration(None).expect("leptos configuration");

    // Redirects from the backend pass through untouched so the browser sees them.
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client");

    let addr = format!("0.0.0.0:{}", config.port);
    let state = state::AppState {
        leptos_options: leptos_conf.leptos_options,
        http,
        config: Arc::new(config),
    };

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "mrt dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
