//! REST API helpers for the ML backend (reached through the server proxy).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each wrapped in a
//! request timeout so a hung backend resolves instead of pinning the UI.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The session check degrades silently to anonymous (`None`); every other
//! call returns `Result` so pages can surface a notice without panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    CsvUpload, CsvUploadResponse, ModelRecord, ModelUpdate, PredictionRequest,
    PredictionResponse, TrainRequest, UserAccount, UserAccountUpdate, UserIdentity,
};

#[cfg(any(test, feature = "hydrate"))]
const ME_ENDPOINT: &str = "/api/v1/me";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/v1/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/v1/logout";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_ENDPOINT: &str = "/api/v1/register";
#[cfg(any(test, feature = "hydrate"))]
const USERS_ENDPOINT: &str = "/api/v1/users/";
#[cfg(any(test, feature = "hydrate"))]
const MODELS_ENDPOINT: &str = "/api/v1/models/";
#[cfg(any(test, feature = "hydrate"))]
const CSV_ENDPOINT: &str = "/api/v1/csv";
#[cfg(any(test, feature = "hydrate"))]
const TRAIN_ENDPOINT: &str = "/api/v1/model_train";

/// Abort any backend round-trip that has not completed within this window.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: i64) -> String {
    format!("/api/v1/users/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn model_endpoint(id: i64) -> String {
    format!("/api/v1/models/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn csv_endpoint(id: i64) -> String {
    format!("/api/v1/csv/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn predict_endpoint(model: &str) -> String {
    format!("/nn/{model}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn timed_out_message(operation: &str) -> String {
    format!("{operation} timed out")
}

/// Race `fut` against the request timeout; `None` means the timer won.
#[cfg(feature = "hydrate")]
async fn with_timeout<T>(fut: impl std::future::Future<Output = T>) -> Option<T> {
    use futures::future::{self, Either};

    let timer = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match future::select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => None,
    }
}

/// Issue `fut`, mapping transport errors and timeouts to a message for `operation`.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    operation: &str,
    fut: impl std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
) -> Result<gloo_net::http::Response, String> {
    match with_timeout(fut).await {
        Some(result) => result.map_err(|e| e.to_string()),
        None => Err(timed_out_message(operation)),
    }
}

/// Check `resp` for a 2xx status, mapping anything else to a message for `operation`.
#[cfg(feature = "hydrate")]
fn require_ok(
    operation: &str,
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, String> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(status_failed_message(operation, resp.status()))
    }
}

/// Resolve the current session against `/api/v1/me`.
///
/// Credentials ride along ambiently in the cookie jar; this code never reads
/// them. Any failure (401, transport error, timeout) is the normal
/// anonymous outcome, logged but never surfaced as an error.
pub async fn fetch_current_user() -> Option<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::get(ME_ENDPOINT).send();
        let resp = match with_timeout(send).await {
            Some(Ok(resp)) => resp,
            Some(Err(error)) => {
                log::warn!("session check failed: {error}");
                return None;
            }
            None => {
                log::warn!("session check timed out");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<UserIdentity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with `POST /api/v1/login`.
///
/// Only success/failure is consumed here; the issued tokens travel back as
/// `Set-Cookie` headers through the proxy and stay opaque to the client.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, or non-2xx status.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let request = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?;
        let resp = send_with_timeout("login", request.send()).await?;
        require_ok("login", resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account with `POST /api/v1/register`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, or non-2xx status.
pub async fn register(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let request = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?;
        let resp = send_with_timeout("register", request.send()).await?;
        require_ok("register", resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the server-side session with `POST /api/v1/logout`.
///
/// # Errors
///
/// Returns an error string when invalidation is not confirmed; callers must
/// leave local session state untouched in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send();
        let resp = send_with_timeout("logout", send).await?;
        require_ok("logout", resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all managed accounts from `GET /api/v1/users/`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn fetch_users() -> Result<Vec<UserAccount>, String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::get(USERS_ENDPOINT).send();
        let resp = require_ok("user list", send_with_timeout("user list", send).await?)?;
        resp.json::<Vec<UserAccount>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Apply a partial account update via `PUT /api/v1/users/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn update_user(id: i64, update: &UserAccountUpdate) -> Result<UserAccount, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::put(&user_endpoint(id))
            .json(update)
            .map_err(|e| e.to_string())?;
        let resp = require_ok("user update", send_with_timeout("user update", request.send()).await?)?;
        resp.json::<UserAccount>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err("not available on server".to_owned())
    }
}

/// Delete an account via `DELETE /api/v1/users/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, or non-2xx status.
pub async fn delete_user(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::delete(&user_endpoint(id)).send();
        let resp = send_with_timeout("user delete", send).await?;
        require_ok("user delete", resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all models from `GET /api/v1/models/`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn fetch_models() -> Result<Vec<ModelRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::get(MODELS_ENDPOINT).send();
        let resp = require_ok("model list", send_with_timeout("model list", send).await?)?;
        resp.json::<Vec<ModelRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Apply a metadata update via `PUT /api/v1/models/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn update_model(id: i64, update: &ModelUpdate) -> Result<ModelRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::put(&model_endpoint(id))
            .json(update)
            .map_err(|e| e.to_string())?;
        let resp = require_ok("model update", send_with_timeout("model update", request.send()).await?)?;
        resp.json::<ModelRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err("not available on server".to_owned())
    }
}

/// Delete a model via `DELETE /api/v1/models/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, or non-2xx status.
pub async fn delete_model(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::delete(&model_endpoint(id)).send();
        let resp = send_with_timeout("model delete", send).await?;
        require_ok("model delete", resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Upload a training CSV via `POST /api/v1/csv`, returning its backend id.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn upload_csv(upload: &CsvUpload) -> Result<CsvUploadResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(CSV_ENDPOINT)
            .json(upload)
            .map_err(|e| e.to_string())?;
        let resp = require_ok("csv upload", send_with_timeout("csv upload", request.send()).await?)?;
        resp.json::<CsvUploadResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = upload;
        Err("not available on server".to_owned())
    }
}

/// Download a stored training CSV via `GET /api/v1/csv/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, or non-2xx status.
pub async fn download_csv(id: i64) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let send = gloo_net::http::Request::get(&csv_endpoint(id)).send();
        let resp = require_ok("csv download", send_with_timeout("csv download", send).await?)?;
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Start a training run via `POST /api/v1/model_train`.
///
/// Training itself happens on the backend; the returned record reflects the
/// enqueued model.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn train_model(request: &TrainRequest) -> Result<ModelRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(TRAIN_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?;
        let resp = require_ok("model training", send_with_timeout("model training", req.send()).await?)?;
        resp.json::<ModelRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Run inference for one patient via `POST /nn/{model}`.
///
/// # Errors
///
/// Returns an error string on transport failure, timeout, non-2xx status, or
/// an unparseable body.
pub async fn predict(
    model: &str,
    request: &PredictionRequest,
) -> Result<PredictionResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&predict_endpoint(model))
            .json(request)
            .map_err(|e| e.to_string())?;
        let resp = require_ok("prediction", send_with_timeout("prediction", req.send()).await?)?;
        resp.json::<PredictionResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (model, request);
        Err("not available on server".to_owned())
    }
}
