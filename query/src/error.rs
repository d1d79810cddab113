//! Query error types.

use crate::Compare;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during query execution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid operand count for {key} {compare}: {count}")]
    InvalidOperandCount {
        key: String,
        compare: Compare,
        count: usize,
    },

    #[error("Cannot compare null with {compare} on {key}")]
    NullComparison { key: String, compare: Compare },

    #[error("Incomparable values for {key} {compare}: {actual} and {expected}")]
    Incomparable {
        key: String,
        compare: Compare,
        actual: &'static str,
        expected: &'static str,
    },

    #[error("No more elements")]
    NoSuchElement,

    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

impl QueryError {
    pub fn invalid_operand_count(key: impl Into<String>, compare: Compare, count: usize) -> Self {
        Self::InvalidOperandCount {
            key: key.into(),
            compare,
            count,
        }
    }

    pub fn null_comparison(key: impl Into<String>, compare: Compare) -> Self {
        Self::NullComparison {
            key: key.into(),
            compare,
        }
    }

    pub fn incomparable(
        key: impl Into<String>,
        compare: Compare,
        actual: &'static str,
        expected: &'static str,
    ) -> Self {
        Self::Incomparable {
            key: key.into(),
            compare,
            actual,
            expected,
        }
    }

    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Returns true for errors caused by a badly formed condition.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperandCount { .. } | Self::NullComparison { .. } | Self::Incomparable { .. }
        )
    }
}
