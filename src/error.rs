//! Error types for address parsing and list fetching

use thiserror::Error;

/// Errors that can occur while parsing an email address
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input could not be split into a local part and a domain
    #[error("malformed address: {0:?}")]
    Malformed(String),
}

/// Errors that can occur while fetching a domain list from a source
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset)
    #[error("transport error fetching {source_name}: {source}")]
    Transport {
        source_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The source answered with a non-success status
    #[error("{source_name} returned status {status}")]
    Status { source_name: String, status: u16 },

    /// The response body could not be read to completion
    #[error("failed to read body from {source_name}: {source}")]
    Body {
        source_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The caller cancelled or timed out the fetch
    #[error("fetch cancelled")]
    Cancelled,
}

/// Result type for address parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
