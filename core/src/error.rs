//! Common error types for Sift backends.

use crate::{EdgeId, ElementKind, VertexId};
use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex not found.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// A key index already exists.
    #[error("Key index already exists: {key} on {kind}")]
    IndexExists { key: String, kind: ElementKind },

    /// A key index does not exist.
    #[error("Key index not found: {key} on {kind}")]
    IndexNotFound { key: String, kind: ElementKind },
}

impl GraphError {
    pub fn index_exists(key: impl Into<String>, kind: ElementKind) -> Self {
        Self::IndexExists {
            key: key.into(),
            kind,
        }
    }

    pub fn index_not_found(key: impl Into<String>, kind: ElementKind) -> Self {
        Self::IndexNotFound {
            key: key.into(),
            kind,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
