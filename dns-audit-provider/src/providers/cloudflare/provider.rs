//! Cloudflare DnsInventory trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsInventory;
use crate::types::{Account, DnsRecord, Listing, Zone};

use super::{CloudflareProvider, MAX_PAGE_SIZE};

pub(crate) fn accounts_path() -> String {
    "/accounts".to_string()
}

pub(crate) fn zones_path(account_id: &str) -> String {
    format!(
        "/zones?account.id={}&per_page={MAX_PAGE_SIZE}",
        urlencoding::encode(account_id)
    )
}

pub(crate) fn dns_records_path(zone_id: &str) -> String {
    format!(
        "/zones/{}/dns_records?per_page={MAX_PAGE_SIZE}",
        urlencoding::encode(zone_id)
    )
}

#[async_trait]
impl DnsInventory for CloudflareProvider {
    async fn list_accounts(&self) -> Result<Listing<Account>> {
        self.get_listing(&accounts_path(), "accounts").await
    }

    async fn list_zones(&self, account_id: &str) -> Result<Listing<Zone>> {
        self.get_listing(
            &zones_path(account_id),
            &format!("zones for account {account_id}"),
        )
        .await
    }

    async fn list_dns_records(&self, zone_id: &str) -> Result<Listing<DnsRecord>> {
        self.get_listing(
            &dns_records_path(zone_id),
            &format!("DNS records for zone {zone_id}"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(accounts_path(), "/accounts");
        assert_eq!(
            zones_path("023e105f4ecef8ad9ca31a8372d0c353"),
            "/zones?account.id=023e105f4ecef8ad9ca31a8372d0c353&per_page=100"
        );
        assert_eq!(
            dns_records_path("z1"),
            "/zones/z1/dns_records?per_page=100"
        );
    }

    #[test]
    fn ids_are_url_encoded() {
        assert_eq!(zones_path("a&b"), "/zones?account.id=a%26b&per_page=100");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = CloudflareProvider::new(crate::types::Credentials::default())
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/client/v4/");
        assert_eq!(provider.base_url, "http://127.0.0.1:8080/client/v4");
    }
}
