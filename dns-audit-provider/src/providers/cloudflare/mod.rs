//! Cloudflare DNS Provider

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::Credentials;

pub(crate) use types::CloudflareResponse;

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare 单页最大条目数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

impl CloudflareProvider {
    /// Create a provider against the public Cloudflare API.
    ///
    /// No request timeout is configured; calls wait for the transport to give up.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            credentials,
            base_url: CF_API_BASE.to_string(),
        })
    }

    /// Point the provider at another API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
