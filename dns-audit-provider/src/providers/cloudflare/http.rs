//! Cloudflare HTTP 请求方法

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::Listing;

use super::{CloudflareProvider, CloudflareResponse};

const X_AUTH_EMAIL: &str = "X-Auth-Email";

impl CloudflareProvider {
    /// Static authentication headers for every request.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_AUTH_EMAIL,
            HeaderValue::from_str(&self.credentials.email).map_err(|_| {
                ProviderError::InvalidHeader {
                    header: X_AUTH_EMAIL,
                }
            })?,
        );
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.credentials.api_token))
            .map_err(|_| ProviderError::InvalidHeader {
                header: "Authorization",
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// 执行 GET 请求并解析为列表
    ///
    /// `context` describes the call in failure logs, e.g. "zones for account 42".
    pub(crate) async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<Listing<T>> {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.get(&url).headers(self.auth_headers()?);

        let (status, body) = HttpUtils::execute_request(request, "GET", path).await?;
        decode_listing(status, &body, path, context)
    }
}

/// Turn a raw response into a [`Listing`].
///
/// Non-2xx responses are logged with `context` and become an empty, failed
/// listing; success bodies must decode.
pub(crate) fn decode_listing<T: DeserializeOwned>(
    status: u16,
    body: &str,
    endpoint: &str,
    context: &str,
) -> Result<Listing<T>> {
    if !(200..300).contains(&status) {
        log::error!("Failed to fetch {context}: {body}");
        return Ok(Listing::failed(status, body));
    }

    let response: CloudflareResponse<T> = HttpUtils::parse_json(body, endpoint)?;
    Ok(Listing::ok(response.result))
}
