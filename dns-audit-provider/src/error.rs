use thiserror::Error;

/// Error type for provider operations.
///
/// API-level rejections (non-2xx) never appear here; see [`crate::Listing`].
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error while requesting {endpoint}: {detail}")]
    NetworkError {
        /// Endpoint being requested.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request to {endpoint} timed out: {detail}")]
    Timeout {
        /// Endpoint being requested.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// A successful response body could not be decoded.
    #[error("Failed to parse response from {endpoint}: {detail}")]
    ParseError {
        /// Endpoint that produced the body.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A credential contains characters that are not allowed in an HTTP header.
    #[error("Invalid value for header {header}")]
    InvalidHeader {
        /// Header name.
        header: &'static str,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ProviderError {
    /// Whether the failure happened below HTTP (connection, TLS, timeout).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ProviderError>;
