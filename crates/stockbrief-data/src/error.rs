//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while resolving a symbol into a quote summary.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Unexpected HTTP status
    #[error("HTTP error: {status} from {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Error payload returned by Yahoo Finance
    #[error("Yahoo Finance API error: {code}: {description}")]
    YahooApi {
        /// Error code reported by the API
        code: String,
        /// Human readable description
        description: String,
    },

    /// The data source does not know the symbol
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Invalid symbol
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// The session crumb could not be obtained
    #[error("Failed to obtain Yahoo crumb: {0}")]
    Crumb(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
