//! Error types for the tackboard engine

use crate::types::EntityKind;
use thiserror::Error;

/// Result type for tackboard operations
pub type Result<T> = std::result::Result<T, TackboardError>;

/// Errors that can occur in tackboard operations
#[derive(Debug, Error)]
pub enum TackboardError {
    /// A referenced record does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: u64 },

    /// Positions inside a container stopped being exactly 0..n-1
    #[error("ordering invariant violated in {container}: {detail}")]
    InvariantViolation { container: String, detail: String },

    /// Verb/noun pair that no operation handles
    #[error("invalid operation: {verb} {noun}")]
    InvalidOperation { verb: String, noun: String },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TackboardError {
    /// Create a not-found error
    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create an invariant violation
    pub fn invariant(container: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            container: container.into(),
            detail: detail.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// NotFound is an expected outcome that callers surface as `null`/`false`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Severity levels for error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Expected outcome, the caller carries on
    Warning,
    /// The operation failed, the workspace is intact
    Error,
    /// The workspace can no longer be trusted
    Critical,
}

/// Errors that know how serious they are
pub trait Severity {
    fn severity(&self) -> ErrorSeverity;
}

impl Severity for TackboardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Warning,
            Self::InvariantViolation { .. } => ErrorSeverity::Critical,
            Self::InvalidOperation { .. }
            | Self::Parse { .. }
            | Self::MissingField { .. }
            | Self::InvalidValue { .. }
            | Self::Json(_) => ErrorSeverity::Error,
        }
    }
}
