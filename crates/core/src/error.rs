//! Domain error model.

use core::num::ParseIntError;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only the operations built around the aging rules can fail (e.g. reading an
/// item back from its listing line). Applying the rules themselves never does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An integer field could not be parsed.
    #[error("invalid integer for `{field}`: {source}")]
    InvalidInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_integer(field: &'static str, source: ParseIntError) -> Self {
        Self::InvalidInteger { field, source }
    }
}
