//! 统一错误类型定义

use dns_audit_provider::ProviderError;
use thiserror::Error;

/// Any failure that ends an audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Transport or decoding failure from the provider
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A record timestamp did not match `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    #[error("Invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Writing to the console failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Log sinks could not be set up
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
