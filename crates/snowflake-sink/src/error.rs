//! Error types for format resolution and encoding.
//!
//! Provides [`FormatError`] for resolution, provisioning, and encoding
//! operations, plus a convenience [`FormatResult`] alias.

use thiserror::Error;

/// Result alias for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while resolving or using a warehouse file format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A format kind string (caller-supplied or warehouse-reported) is not
    /// in the supported set, or no encoder is registered for a kind.
    #[error("unsupported file format: {0}")]
    InvalidFormat(String),

    /// Detection required a unique named format object but the warehouse
    /// reported zero or more than one match.
    #[error("named file format not found: {0}")]
    FormatNotFound(String),

    /// A warehouse statement failed in the query executor.
    #[error("warehouse query failed: {0}")]
    Query(String),

    /// Serializing a record batch into staging-file bytes failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// A configuration value is invalid.
    #[error("invalid config key '{key}': {message}")]
    InvalidConfig {
        /// The configuration key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },

    /// An Arrow error propagated from batch encoding.
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow_schema::ArrowError),
}
