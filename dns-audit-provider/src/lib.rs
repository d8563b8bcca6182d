//! # dns-audit-provider
//!
//! Read-only access to a Cloudflare account hierarchy: accounts, the zones
//! owned by each account, and the DNS records inside each zone.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_audit_provider::{CloudflareProvider, Credentials, DnsInventory};
//!
//! # async fn example() -> dns_audit_provider::Result<()> {
//! let provider = CloudflareProvider::new(Credentials {
//!     email: "ops@example.com".to_string(),
//!     api_token: "your-token".to_string(),
//! })?;
//!
//! let accounts = provider.list_accounts().await?;
//! for account in &accounts.items {
//!     let zones = provider.list_zones(&account.id).await?;
//!     for zone in &zones.items {
//!         let records = provider.list_dns_records(&zone.id).await?;
//!         println!("{} / {}: {} records", account.name, zone.name, records.items.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! A non-2xx API response is *not* an error: it is logged and the call returns
//! an empty [`Listing`] whose [`failure`](Listing::failure) records the status
//! and body. Only transport failures and undecodable success bodies surface as
//! [`ProviderError`].

mod error;
mod http_client;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, Result};

pub use traits::DnsInventory;

pub use types::{Account, Credentials, DnsRecord, FetchFailure, Listing, RecordType, Zone};

pub use providers::CloudflareProvider;
