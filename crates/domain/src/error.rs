//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time zone identifier is empty or otherwise unusable.
    #[error("invalid zone identifier: {0:?}")]
    InvalidZoneId(String),

    /// The configured service endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
