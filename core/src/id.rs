//! Identity types for Sift elements.
//!
//! All identifiers are 64-bit values that are:
//! - Unique within their namespace
//! - Immutable once assigned
//! - Ordered by allocation, which is the scan order of the reference backend

use std::fmt;

/// Unique identifier for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Create a new VertexId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Unique identifier for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Create a new EdgeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
