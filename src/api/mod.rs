//! Typed client for the backend REST API.
//!
//! All requests go through the helpers in this module so error surfacing is
//! uniform: a non-2xx response yields the server's `detail` message when one
//! is present, a transport failure yields a generic connectivity message, and
//! every failure is logged with the endpoint that produced it.

pub mod admin;
pub mod chat;
pub mod documents;
pub mod history;

pub use admin::{AdminStats, ActivityEntry};
pub use chat::{ChatRequest, ChatResponse, PredefinedQuestions};
pub use documents::{Document, DocumentListResponse, UploadResponse, UploadedDocument};
pub use history::{DeleteAllResponse, HistoryEntry};

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::API_BASE_URL;

/// Uniform failure type for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("Could not reach the server. Check your connection. ({0})")]
    Network(String),
    /// The server answered with a non-2xx status; carries the `detail`
    /// message when the body had one.
    #[error("{0}")]
    Server(String),
    /// A 2xx response whose body did not parse as the expected JSON.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

fn url(endpoint: &str) -> String {
    format!("{API_BASE_URL}{endpoint}")
}

fn network_error(endpoint: &str, err: gloo_net::Error) -> ApiError {
    log::error!("API call failed: {endpoint}: {err}");
    ApiError::Network(err.to_string())
}

async fn server_error(endpoint: &str, response: Response) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    let status = response.status();
    let status_text = response.status_text();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Server error: {status} {status_text}."),
    };
    log::error!("API call failed: {endpoint}: {message}");
    ApiError::Server(message)
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| {
        log::error!("API call failed: {endpoint}: {err}");
        ApiError::Decode(err.to_string())
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let response = Request::get(&url(endpoint))
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    if !response.ok() {
        return Err(server_error(endpoint, response).await);
    }
    decode(endpoint, response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&url(endpoint))
        .json(body)
        .map_err(|e| network_error(endpoint, e))?
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    if !response.ok() {
        return Err(server_error(endpoint, response).await);
    }
    decode(endpoint, response).await
}

/// POST a multipart form. No content type is forced here: the transport sets
/// the multipart boundary itself.
pub(crate) async fn post_multipart<T: DeserializeOwned>(
    endpoint: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = Request::post(&url(endpoint))
        .body(form)
        .map_err(|e| network_error(endpoint, e))?
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    if !response.ok() {
        return Err(server_error(endpoint, response).await);
    }
    decode(endpoint, response).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let response = Request::delete(&url(endpoint))
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    if !response.ok() {
        return Err(server_error(endpoint, response).await);
    }
    decode(endpoint, response).await
}

/// DELETE where the response body does not matter. A 204 or an empty body is
/// success; nothing is parsed.
pub(crate) async fn delete(endpoint: &str) -> Result<(), ApiError> {
    let response = Request::delete(&url(endpoint))
        .send()
        .await
        .map_err(|e| network_error(endpoint, e))?;
    if !response.ok() {
        return Err(server_error(endpoint, response).await);
    }
    Ok(())
}
