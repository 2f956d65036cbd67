//! HTTP helpers for JSON APIs with consistent timeouts and error handling. Feature
//! clients use these helpers to avoid duplicating request setup and to enforce a
//! predictable timeout policy. The helpers do not store tokens; they only attach
//! headers provided by callers.

use super::{codec::decode_or_default, config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON with optional extra headers.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let response = send_get(path, headers).await?;
    handle_json_response(response).await
}

/// Fetches JSON where a successful empty body means `T::default()`.
pub async fn get_json_or_default<T: DeserializeOwned + Default>(
    path: &str,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let response = send_get(path, headers).await?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))?;
    decode_or_default(&body)
}

async fn send_get(path: &str, headers: &[(String, String)]) -> Result<Response, AppError> {
    let url = AppConfig::load().endpoint(path);
    tracing::debug!(path, "GET");
    send_with_timeout(|signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    post_json_with_headers(path, body, &[]).await
}

/// Posts JSON with custom headers and parses a JSON response.
pub async fn post_json_with_headers<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let url = AppConfig::load().endpoint(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    tracing::debug!(path, "POST");
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Builds the `Authorization` header for bearer-protected endpoints.
pub fn bearer(token: &str) -> Vec<(String, String)> {
    vec![("Authorization".to_string(), format!("Bearer {token}"))]
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| {
        let err = map_request_error(err);
        tracing::warn!(error = %err, "request failed before a response");
        err
    })
}

/// Parses JSON responses and surfaces HTTP errors with the API's message when present.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(rejected(response).await)
    }
}

/// Converts a non-2xx response into an `AppError` carrying the API's message.
async fn rejected(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "request rejected by the API");
    AppError::from_response(status, &body)
}
