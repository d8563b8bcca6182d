//! Environment configuration
//!
//! Read once at startup; `.env` has already been merged into the process
//! environment by the time [`Settings::from_env`] runs.

use dns_audit_provider::Credentials;

pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
pub const ENV_ACCOUNTS: &str = "ACCOUNTS";
pub const ENV_ZONES: &str = "ZONES";

/// Process-wide settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub credentials: Credentials,
    /// Lowercased substrings from `ACCOUNTS`, `None` when unset
    pub account_filters: Option<Vec<String>>,
    /// Lowercased substrings from `ZONES`, `None` when unset
    pub zone_filters: Option<Vec<String>>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let email = lookup(ENV_EMAIL).unwrap_or_else(|| {
            tracing::warn!("{ENV_EMAIL} is not set; requests will likely be rejected");
            String::new()
        });
        let api_token = lookup(ENV_API_TOKEN).unwrap_or_else(|| {
            tracing::warn!("{ENV_API_TOKEN} is not set; requests will likely be rejected");
            String::new()
        });

        Self {
            credentials: Credentials { email, api_token },
            account_filters: parse_filter_list(lookup(ENV_ACCOUNTS).as_deref()),
            zone_filters: parse_filter_list(lookup(ENV_ZONES).as_deref()),
        }
    }
}

/// Split a comma-separated filter variable into lowercased entries.
///
/// Entries are not trimmed. An empty value yields a single empty entry,
/// which matches every name.
pub fn parse_filter_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|value| value.split(',').map(str::to_lowercase).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_filter_is_none() {
        assert_eq!(parse_filter_list(None), None);
    }

    #[test]
    fn filter_list_is_lowercased_and_split() {
        assert_eq!(
            parse_filter_list(Some("Prod,STAGING")),
            Some(vec!["prod".to_string(), "staging".to_string()])
        );
    }

    #[test]
    fn empty_filter_is_single_empty_entry() {
        assert_eq!(parse_filter_list(Some("")), Some(vec![String::new()]));
    }

    #[test]
    fn entries_keep_whitespace() {
        assert_eq!(
            parse_filter_list(Some("a, b")),
            Some(vec!["a".to_string(), " b".to_string()])
        );
    }

    #[test]
    fn settings_from_lookup() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_EMAIL, "ops@example.com"),
            (ENV_API_TOKEN, "tok"),
            (ENV_ZONES, "Example"),
        ]));
        assert_eq!(settings.credentials.email, "ops@example.com");
        assert_eq!(settings.credentials.api_token, "tok");
        assert_eq!(settings.account_filters, None);
        assert_eq!(settings.zone_filters, Some(vec!["example".to_string()]));
    }

    #[test]
    fn missing_credentials_become_empty() {
        let settings = Settings::from_lookup(|_| None);
        assert!(settings.credentials.email.is_empty());
        assert!(settings.credentials.api_token.is_empty());
    }
}
