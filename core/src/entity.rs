//! Element structures for Sift.
//!
//! Vertices and edges are the two element kinds of a property graph. The
//! query engine only ever sees them through the [`Element`] capability.

use crate::{EdgeId, Properties, Value, VertexId};
use std::fmt;

/// Read access to an element's properties.
///
/// This is the only view of an element the filtering engine depends on.
pub trait Element {
    /// Get a property value by key, or `None` if the property is unset.
    fn property(&self, key: &str) -> Option<&Value>;
}

impl<E: Element + ?Sized> Element for &E {
    fn property(&self, key: &str) -> Option<&Value> {
        (**self).property(key)
    }
}

impl Element for Properties {
    fn property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// The kind of element a query runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => write!(f, "vertex"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

/// A vertex in the property graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Unique identifier for this vertex.
    pub id: VertexId,
    /// Property values.
    pub properties: Properties,
}

impl Vertex {
    /// Create a new vertex with the given properties.
    pub fn new(id: VertexId, properties: Properties) -> Self {
        Self { id, properties }
    }

    /// Set a property value, returning the previous one.
    pub fn set_property(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(key.into(), value)
    }

    /// Remove a property.
    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }
}

impl Element for Vertex {
    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

/// A directed, labeled edge between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Tail vertex.
    pub out_vertex: VertexId,
    /// Head vertex.
    pub in_vertex: VertexId,
    /// Edge label.
    pub label: String,
    /// Property values.
    pub properties: Properties,
}

impl Edge {
    /// Create a new edge with the given properties.
    pub fn new(
        id: EdgeId,
        out_vertex: VertexId,
        in_vertex: VertexId,
        label: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            id,
            out_vertex,
            in_vertex,
            label: label.into(),
            properties,
        }
    }

    /// Check if this edge is incident to a vertex.
    pub fn involves(&self, vertex: VertexId) -> bool {
        self.out_vertex == vertex || self.in_vertex == vertex
    }

    /// Set a property value, returning the previous one.
    pub fn set_property(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(key.into(), value)
    }

    /// Remove a property.
    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }
}

impl Element for Edge {
    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
