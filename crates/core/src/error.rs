//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic request/domain failures. Transport and
/// storage concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request body failed validation.
    ///
    /// The message is the exact reason string the HTTP layer returns as
    /// `{"error": <reason>}`.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    ///
    /// An id that does not parse cannot resolve to a resource, so the HTTP
    /// layer surfaces this as not-found rather than bad-request.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
