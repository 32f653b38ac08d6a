//! HTTP client adapter for the remote API.
//!
//! Thin wrapper over `gloo_net` that attaches the bearer token from the
//! session store and maps failures into a single [`ApiError`] carrying a
//! human-readable message: the payload's `message` field when the server
//! sent one, else a generic fallback.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::FormData;

use crate::session::Session;

/// Base path of the remote API.
pub const API_BASE: &str = "/api";

/// Base path for uploaded property images.
pub const UPLOADS_BASE: &str = "/uploads";

const NETWORK_FAILURE: &str = "Network error. Please try again.";

/// A failed API call, with a message fit for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shape of an error payload from the API.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the bearer token when a session exists.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match Session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Map a non-2xx response to an [`ApiError`], preferring the payload
/// message.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let fallback = format!("Request failed with status {}", response.status());
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => m,
        _ => fallback,
    };
    Err(ApiError::new(message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|_| ApiError::new("Unexpected response from server."))
}

/// GET `path` and decode the JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(&url(path)))
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    decode(check(response).await?).await
}

/// POST `body` to `path` and decode the JSON payload.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::post(&url(path)))
        .json(body)
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    let response = request
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    decode(check(response).await?).await
}

/// POST `body` to `path`, ignoring the response payload.
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorize(Request::post(&url(path)))
        .json(body)
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    let response = request
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    check(response).await.map(|_| ())
}

/// PATCH `body` to `path`, ignoring the response payload.
pub async fn patch<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorize(Request::patch(&url(path)))
        .json(body)
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    let response = request
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    check(response).await.map(|_| ())
}

/// DELETE `path`.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    check(response).await.map(|_| ())
}

/// POST multipart form data to `path` (property images upload).
pub async fn post_form(path: &str, form: FormData) -> Result<(), ApiError> {
    let request = authorize(Request::post(&url(path)))
        .body(form)
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    let response = request
        .send()
        .await
        .map_err(|_| ApiError::new(NETWORK_FAILURE))?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        assert_eq!(url("/properties"), "/api/properties");
        assert_eq!(url("/bookings/b1/status"), "/api/bookings/b1/status");
    }

    #[test]
    fn test_api_error_displays_message() {
        let err = ApiError::new("Login failed");
        assert_eq!(err.to_string(), "Login failed");
    }
}
