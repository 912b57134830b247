//! Error types for drive-article-validator.
//!
//! This module defines the error types returned by validation, fetching,
//! and configuration operations.

/// Error type for validation and service operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input produced no usable HTML tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Unexpected failure while running the validation rules.
    #[error("Validation failed internally: {0}")]
    ValidationInternal(String),

    /// The article source could not deliver the document.
    #[error("Fetching article failed: {0}")]
    Fetch(String),

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for validation and service operations.
pub type Result<T> = std::result::Result<T, Error>;
