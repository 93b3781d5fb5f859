//! Error types for sqlexpr

use crate::composite::CompositeKind;
use thiserror::Error;

/// Result type alias for sqlexpr operations
pub type ExprResult<T> = Result<T, ExprError>;

/// Error types for expression building and literal quoting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// Comparison operator is not part of the supported set
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    /// Value/type-hint combination cannot be rendered as a literal
    #[error("Cannot quote value {value}: {reason}")]
    UnquotableValue { value: String, reason: String },

    /// A composite expression was rendered without any parts
    #[error("Cannot render an empty {0} composite expression")]
    EmptyComposite(CompositeKind),

    /// Identifier cannot be quoted
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Dialect configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl ExprError {
    /// Create an unquotable value error
    pub fn unquotable(value: impl Into<String>, reason: impl Into<String>) -> Self {
        let err = Self::UnquotableValue {
            value: value.into(),
            reason: reason.into(),
        };
        err.traced()
    }

    /// Create an invalid operator error
    pub fn invalid_operator(op: impl Into<String>) -> Self {
        Self::InvalidOperator(op.into()).traced()
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into()).traced()
    }

    /// Create an empty composite error
    pub fn empty_composite(kind: CompositeKind) -> Self {
        Self::EmptyComposite(kind).traced()
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into()).traced()
    }

    /// Check if this is an invalid operator error
    pub fn is_invalid_operator(&self) -> bool {
        matches!(self, Self::InvalidOperator(_))
    }

    /// Check if this is an unquotable value error
    pub fn is_unquotable(&self) -> bool {
        matches!(self, Self::UnquotableValue { .. })
    }

    /// Check if this is an empty composite error
    pub fn is_empty_composite(&self) -> bool {
        matches!(self, Self::EmptyComposite(_))
    }

    #[cfg(feature = "tracing")]
    fn traced(self) -> Self {
        tracing::debug!(target: "sqlexpr.error", error = %self);
        self
    }

    #[cfg(not(feature = "tracing"))]
    fn traced(self) -> Self {
        self
    }
}
