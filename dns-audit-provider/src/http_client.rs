//! Generic HTTP request handling
//!
//! Sends a prepared `RequestBuilder`, logs the exchange and hands back the raw
//! status and body. Interpreting the status is left to the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Maximum number of bytes of a response body written to debug logs.
const DEBUG_BODY_LIMIT: usize = 512;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Only failures below HTTP become errors: a 4xx/5xx response is returned
    /// like any other.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        endpoint: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("{method_name} {endpoint}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(&e, endpoint))?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed for {endpoint}: {e}");
            log::debug!("Raw response: {}", truncate(response_text));
            ProviderError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn transport_error(e: &reqwest::Error, endpoint: &str) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    }
}

fn truncate(s: &str) -> &str {
    if s.len() <= DEBUG_BODY_LIMIT {
        return s;
    }
    let mut end = DEBUG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
