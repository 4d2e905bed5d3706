//! HTTP helpers for the marketplace JSON API. Every request goes through one
//! dispatch path so timeout, cookie and error handling stay uniform across
//! feature clients. Bearer tokens are attached per call and never stored
//! here.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Abort deadline (milliseconds) applied to every request.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// `{"data": ...}` envelope used by the advertisement and application
/// routers. Callers deserialize the envelope and take `data`.
#[derive(Debug, serde::Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

/// Fetches JSON from a public endpoint, cookies included.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = dispatch(Verb::Get, path, None, None).await?;
    handle_json_response(response).await
}

/// Fetches JSON from a bearer-authenticated endpoint.
pub async fn get_json_with_auth<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let response = dispatch(Verb::Get, path, Some(token), None).await?;
    handle_json_response(response).await
}

/// Posts JSON without auth and parses a JSON response. Used by login and
/// registration, so callers must never log the payload.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = dispatch(Verb::Post, path, None, Some(encode_body(body)?)).await?;
    handle_json_response(response).await
}

/// Posts JSON with a bearer token and ignores the response body.
pub async fn post_json_with_auth<B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<(), AppError> {
    let response = dispatch(Verb::Post, path, Some(token), Some(encode_body(body)?)).await?;
    handle_empty_response(response).await
}

/// Posts JSON with a bearer token and parses a JSON response.
pub async fn post_json_with_auth_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let response = dispatch(Verb::Post, path, Some(token), Some(encode_body(body)?)).await?;
    handle_json_response(response).await
}

/// Puts JSON with a bearer token and parses a JSON response.
pub async fn put_json_with_auth_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, AppError> {
    let response = dispatch(Verb::Put, path, Some(token), Some(encode_body(body)?)).await?;
    handle_json_response(response).await
}

/// Patches JSON with a bearer token and ignores the response body.
pub async fn patch_json_with_auth<B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<(), AppError> {
    let response = dispatch(Verb::Patch, path, Some(token), Some(encode_body(body)?)).await?;
    handle_empty_response(response).await
}

/// Deletes a resource with a bearer token.
pub async fn delete_with_auth(path: &str, token: &str) -> Result<(), AppError> {
    let response = dispatch(Verb::Delete, path, Some(token), None).await?;
    handle_empty_response(response).await
}

/// Posts without a body, cookies included. Used to clear the server session.
pub async fn post_empty(path: &str) -> Result<(), AppError> {
    let response = dispatch(Verb::Post, path, None, None).await?;
    handle_empty_response(response).await
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Single request path: credentials, optional bearer header, optional JSON
/// payload, and the shared abort timeout.
async fn dispatch(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    payload: Option<String>,
) -> Result<gloo_net::http::Response, AppError> {
    let url = build_url(path);
    let bearer = token.map(|token| format!("Bearer {token}"));

    send_with_timeout(move |signal| {
        let mut builder = verb
            .builder(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        if let Some(value) = &bearer {
            builder = builder.header("Authorization", value);
        }
        let request = match payload {
            Some(body) => builder.header("Content-Type", "application/json").body(body),
            None => builder.build(),
        };
        request.map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Joins the configured API base with the endpoint path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Builds a query string (including the leading `?`) from key/value pairs,
/// skipping pairs whose value is `None` or empty. Returns an empty string
/// when nothing survives.
pub fn build_query(pairs: &[(&str, Option<String>)]) -> String {
    let mut parts = Vec::new();
    for (key, value) in pairs {
        if let Some(value) = value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                parts.push(format!("{key}={}", encode_query_component(trimmed)));
            }
        }
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Percent-encodes a query component, leaving RFC 3986 unreserved bytes as-is.
pub fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}

/// Distinguishes aborted requests from plain transport failures.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request wired to an abort timer so the UI never hangs on a stuck
/// connection.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Turns a non-2xx answer into an `Http` error with a sanitized body.
async fn error_from_response(response: gloo_net::http::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Request failed.".to_string();
    }
    trimmed.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{build_query, encode_query_component, join_url, sanitize_body};

    #[test]
    fn join_url_handles_slashes_on_either_side() {
        assert_eq!(
            join_url("http://localhost:3000/api/v1", "/advertisements"),
            "http://localhost:3000/api/v1/advertisements"
        );
        assert_eq!(
            join_url("http://localhost:3000/api/v1/", "advertisements"),
            "http://localhost:3000/api/v1/advertisements"
        );
        assert_eq!(join_url("", "/auth/login"), "/auth/login");
    }

    #[test]
    fn build_query_skips_missing_and_empty_values() {
        let query = build_query(&[
            ("search", Some("summer sale".to_string())),
            ("category", None),
            ("status", Some("  ".to_string())),
            ("minBudget", Some("500".to_string())),
        ]);
        assert_eq!(query, "?search=summer%20sale&minBudget=500");
    }

    #[test]
    fn build_query_empty_when_no_values() {
        assert_eq!(build_query(&[("search", None), ("category", None)]), "");
    }

    #[test]
    fn encode_query_component_escapes_reserved_bytes() {
        assert_eq!(encode_query_component("plain-text_1.0~"), "plain-text_1.0~");
        assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_component("50% off"), "50%25%20off");
    }

    #[test]
    fn sanitize_body_trims_and_caps() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  upstream broke  ".to_string()), "upstream broke");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
