//! Generic HTTP client tools
//!
//! Shared request processing for the admin API client: sending, logging,
//! status classification and JSON decoding. Every failure is returned to the
//! caller as a [`CoreError`]. Requests are never retried; a failed call
//! waits for the user to retry it.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code plus response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `path` - endpoint path (for logs)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status, including non-2xx
    /// * `Err(CoreError::Timeout | CoreError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> CoreResult<(u16, String)> {
        log::debug!("[admin-api] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::NetworkError(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[admin-api] {method_name} {path} -> {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        log::debug!(
            "[admin-api] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Maps a non-2xx status to the matching error, passing 2xx bodies through.
    pub fn ensure_success(status_code: u16, response_text: String) -> CoreResult<String> {
        match status_code {
            200..=299 => Ok(response_text),
            401 | 403 => {
                log::warn!("[admin-api] Rejected credentials (HTTP {status_code})");
                Err(CoreError::Unauthorized(extract_message(&response_text)))
            }
            _ => {
                log::warn!("[admin-api] Request failed (HTTP {status_code})");
                Err(CoreError::HttpStatus {
                    status: status_code,
                    body: extract_message(&response_text),
                })
            }
        }
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(CoreError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[admin-api] JSON parse failed: {e}");
            log::error!(
                "[admin-api] Raw response: {}",
                truncate_for_log(response_text)
            );
            CoreError::ParseError(e.to_string())
        })
    }
}

/// Pulls `message` out of an error body such as `{"status":false,"message":"..."}`,
/// falling back to the truncated raw text.
fn extract_message(response_text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(response_text)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| truncate_for_log(response_text))
}
