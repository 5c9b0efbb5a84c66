//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use reqwest::Response;

use trademind_domain::error::{Error, Result};

/// Utilities for processing HTTP responses
///
/// Provides the common response handling pattern used by embedding and
/// search providers: status mapping followed by JSON extraction.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `to_error` - Error constructor of the calling provider family
    ///   (e.g., `Error::embedding` or `Error::search`)
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        to_error: impl Fn(String) -> Error,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => to_error(format!("{provider_name} authentication failed: {error_text}")),
                429 => to_error(format!("{provider_name} rate limit exceeded: {error_text}")),
                500..=599 => {
                    to_error(format!("{provider_name} server error ({code}): {error_text}"))
                }
                _ => to_error(format!("{provider_name} request failed ({code}): {error_text}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| to_error(format!("{provider_name} response parse failed: {e}")))
    }
}
