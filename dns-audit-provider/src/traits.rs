use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Account, DnsRecord, Listing, Zone};

/// Read-only view of a DNS provider's account hierarchy.
///
/// Every method returns `Ok` with an empty, failed [`Listing`] when the API
/// rejects the call; `Err` is reserved for transport and decoding failures.
#[async_trait]
pub trait DnsInventory: Send + Sync {
    /// List accounts visible to the credentials.
    async fn list_accounts(&self) -> Result<Listing<Account>>;

    /// List zones owned by an account (first page only).
    async fn list_zones(&self, account_id: &str) -> Result<Listing<Zone>>;

    /// List DNS records of a zone (first page only).
    async fn list_dns_records(&self, zone_id: &str) -> Result<Listing<DnsRecord>>;
}
