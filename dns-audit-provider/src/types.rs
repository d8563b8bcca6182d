//! Public data types.

use std::fmt;

use serde::{Deserialize, Deserializer};

// ============ Credentials ============

/// Static authentication pair sent with every request.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Sent as `X-Auth-Email`.
    pub email: String,
    /// Sent as `Authorization: Bearer <token>`.
    pub api_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_token", &"***")
            .finish()
    }
}

// ============ Hierarchy ============

/// A billing / organizational unit owning zones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

/// A DNS zone belonging to an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

// ============ DNS Records ============

/// DNS record type.
///
/// Types without a dedicated variant are kept verbatim in [`RecordType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Other(String),
}

impl From<String> for RecordType {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "NS" => Self::Ns,
            "SRV" => Self::Srv,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for RecordType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record as returned by the records endpoint.
///
/// Optional wire fields are resolved here: a missing or `null` `proxied` is
/// `false`, missing `priority` / `comment` stay `None`. The timestamps are kept as raw
/// strings and interpreted by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxied: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: u32,
    pub created_on: String,
    pub modified_on: String,
    #[serde(default)]
    pub comment: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============ Listings ============

/// A rejected (non-2xx) API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// Result of one list call.
///
/// `failure` is set when the API rejected the call; `items` is then empty.
/// This is how "zero items" and "could not fetch" are told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub failure: Option<FetchFailure>,
}

impl<T> Listing<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            items,
            failure: None,
        }
    }

    pub fn failed(status: u16, body: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            failure: Some(FetchFailure {
                status,
                body: body.into(),
            }),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_known_and_unknown() {
        assert_eq!(RecordType::from("cname"), RecordType::Cname);
        assert_eq!(RecordType::from("AAAA"), RecordType::Aaaa);
        assert_eq!(
            RecordType::from("CAA"),
            RecordType::Other("CAA".to_string())
        );
        assert_eq!(RecordType::from("HTTPS").to_string(), "HTTPS");
        assert_eq!(RecordType::Srv.to_string(), "SRV");
    }

    #[test]
    fn dns_record_defaults_optional_fields() {
        let json = r#"{
            "type": "A",
            "name": "www.example.com",
            "content": "192.0.2.1",
            "ttl": 1,
            "created_on": "2024-01-02T03:04:05.123456Z",
            "modified_on": "2024-01-02T03:04:05.123456Z"
        }"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::A);
        assert!(!record.proxied);
        assert_eq!(record.priority, None);
        assert_eq!(record.comment, None);
    }

    #[test]
    fn dns_record_null_optionals() {
        let json = r#"{
            "type": "MX",
            "name": "example.com",
            "content": "mail.example.com",
            "priority": 10,
            "proxied": true,
            "ttl": 300,
            "comment": null,
            "created_on": "2024-01-02T03:04:05.1Z",
            "modified_on": "2024-01-02T03:04:05.1Z"
        }"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.priority, Some(10));
        assert!(record.proxied);
        assert_eq!(record.comment, None);
    }

    #[test]
    fn dns_record_null_fields_use_defaults() {
        let json = r#"{
            "type": "TXT",
            "name": null,
            "content": null,
            "proxied": null,
            "ttl": null,
            "created_on": "2024-01-02T03:04:05.123456Z",
            "modified_on": "2024-01-02T03:04:05.123456Z"
        }"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::Txt);
        assert!(!record.proxied);
        assert_eq!(record.name, "");
        assert_eq!(record.content, "");
        assert_eq!(record.ttl, 0);
    }

    #[test]
    fn dns_record_requires_timestamps() {
        let json = r#"{"type": "A", "name": "a", "content": "b", "ttl": 1}"#;
        assert!(serde_json::from_str::<DnsRecord>(json).is_err());
    }

    #[test]
    fn listing_failed_is_empty() {
        let listing: Listing<Zone> = Listing::failed(403, "forbidden");
        assert!(listing.items.is_empty());
        assert!(listing.is_failed());
        assert_eq!(listing.failure.unwrap().status, 403);
    }

    #[test]
    fn credentials_debug_hides_token() {
        let creds = Credentials {
            email: "ops@example.com".into(),
            api_token: "secret-token".into(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("ops@example.com"));
        assert!(!debug.contains("secret-token"));
    }
}
