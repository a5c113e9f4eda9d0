//! HTTP helper functions for Crux Core
//!
//! This module keeps response handling out of the update handlers so it can
//! be read and tested on its own.

use crux_http::{HttpError, Response};

/// Base URL for API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// Shells strip this prefix and resolve the remainder against the configured
/// API address.
pub const BASE_URL: &str = "https://relative";

/// Error shown when a failed response carries no usable `detail`
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use dietcap_ui_core::http_helpers::build_url;
/// let url = build_url("/login");
/// assert_eq!(url, "https://relative/login");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Extract the `detail` string of a JSON error body.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

/// Parse a JSON body.
pub fn parse_json_body<T: serde::de::DeserializeOwned>(
    action: &str,
    body: Option<Vec<u8>>,
) -> Result<T, String> {
    match body {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Message shown for a failed request.
///
/// `crux_http` reports every non-2xx status as `HttpError::Http`, carrying
/// the response body. Its `detail` is shown, or a generic message.
pub fn request_error_message(action: &str, error: HttpError) -> String {
    match error {
        HttpError::Http { body, .. } => {
            let detail = body.as_deref().and_then(extract_detail);
            log::warn!("{action} request rejected: {detail:?}");
            detail.unwrap_or_else(|| GENERIC_ERROR.to_string())
        }
        error => map_http_error(action, error),
    }
}

/// Reduce a transport error (no response received) to a message.
pub fn map_http_error(action: &str, error: HttpError) -> String {
    log::warn!("{action} request failed: {error}");
    error.to_string()
}

/// Process HTTP response result and check status only (no body parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    result
        .map(|_| ())
        .map_err(|e| request_error_message(action, e))
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_body(action, response.take_body()),
        Err(e) => Err(request_error_message(action, e)),
    }
}
