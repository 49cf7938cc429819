//! Reverse proxy for ML backend routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks only to this host; `/api/*` and `/nn/*` are forwarded
//! to the external backend with method, query, headers, and body intact.
//! Cookies pass through in both directions, so the session credential stays
//! first-party and the client never learns the backend address.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::state::AppState;

/// Upper bound for buffered request bodies (training CSVs included).
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Hop-by-hop headers that terminate at each hop and must not be forwarded.
const HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body unreadable: {0}")]
    Body(axum::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy forwarding failed");
        (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
    }
}

/// Whether `name` must be dropped when relaying a request or response.
///
/// `host` is rewritten by the HTTP client for the upstream authority, so it
/// is stripped here as well.
fn is_hop_header(name: &str) -> bool {
    name.eq_ignore_ascii_case("host")
        || HOP_HEADERS.iter().any(|hop| name.eq_ignore_ascii_case(hop))
}

/// Join the backend base URL with the incoming request path and query.
fn target_url(backend_url: &str, uri: &Uri) -> String {
    match uri.query() {
        Some(query) => format!("{backend_url}{}?{query}", uri.path()),
        None => format!("{backend_url}{}", uri.path()),
    }
}

/// Forward one request to the ML backend and relay its response.
pub async fn forward(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = target_url(&state.config.backend_url, &parts.uri);
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(ProxyError::Body)?;

    tracing::debug!(method = %parts.method, %url, "forwarding to backend");

    let mut upstream = state.http.request(parts.method.clone(), url);
    for (name, value) in &parts.headers {
        if !is_hop_header(name.as_str()) {
            upstream = upstream.header(name.clone(), value.clone());
        }
    }
    let upstream_response = upstream.body(bytes).send().await?;

    let status = upstream_response.status();
    let mut headers = HeaderMap::new();
    for (name, value) in upstream_response.headers() {
        if !is_hop_header(name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }
    let payload = upstream_response.bytes().await?;

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
