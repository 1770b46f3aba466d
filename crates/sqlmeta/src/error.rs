//! Error types for sqlmeta

use thiserror::Error;

/// Result type alias for annotation parsing.
pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// A malformed annotation header.
///
/// Every variant is local to a single annotation line: the scanner records it
/// and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// The declared query name is not a valid identifier.
    #[error("invalid query name: {0:?}")]
    InvalidName(String),

    /// The header names a query but declares no execution mode.
    #[error("missing query type [':one', ':many', ':exec', ':execrows', ':execresult']: {0}")]
    MissingExecutionMode(String),

    /// The header does not have the `marker name :mode` shape.
    #[error("invalid query comment: {0}")]
    MalformedAnnotation(String),

    /// The mode token is not one of the known execution modes.
    #[error("invalid query type: {0}")]
    InvalidExecutionMode(String),
}

impl AnnotationError {
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    pub fn missing_mode(line: impl Into<String>) -> Self {
        Self::MissingExecutionMode(line.into())
    }

    pub fn malformed(line: impl Into<String>) -> Self {
        Self::MalformedAnnotation(line.into())
    }

    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidExecutionMode(mode.into())
    }
}

/// An [`AnnotationError`] tied to the zero-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {error}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub error: AnnotationError,
}
