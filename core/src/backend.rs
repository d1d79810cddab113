//! The backend contract consumed by the query engine.
//!
//! A backend only has to enumerate all vertices and all edges. Backends
//! that maintain exact-match indices on property keys can additionally
//! expose a [`KeyIndex`], which the planner uses to seed equality queries.
//!
//! Both traits are parameterized by the lifetime of the graph borrow so
//! that backends can hand out references to elements they own.

use crate::{Element, ElementKind, Value};
use std::collections::HashSet;

/// A lazily pulled sequence of elements.
pub type ElementIter<'g, E> = Box<dyn Iterator<Item = E> + 'g>;

/// A property graph that can enumerate its elements.
pub trait Graph<'g> {
    /// Element type yielded for vertices.
    type Vertex: Element + 'g;
    /// Element type yielded for edges.
    type Edge: Element + 'g;

    /// All vertices, in backend order.
    fn vertices(&'g self) -> ElementIter<'g, Self::Vertex>;

    /// All edges, in backend order.
    fn edges(&'g self) -> ElementIter<'g, Self::Edge>;

    /// The key-index capability, if this backend has one.
    fn key_index(&'g self) -> Option<&'g dyn KeyIndex<'g, Vertex = Self::Vertex, Edge = Self::Edge>> {
        None
    }
}

/// Exact-match lookup of elements by property value.
///
/// A lookup must return at least every element whose property equals the
/// value. Returning extra elements is allowed: callers re-check.
pub trait KeyIndex<'g> {
    type Vertex: Element + 'g;
    type Edge: Element + 'g;

    /// The property keys indexed for the given element kind.
    fn indexed_keys(&self, kind: ElementKind) -> HashSet<String>;

    /// Vertices whose property `key` equals `value`.
    fn vertices_by(&'g self, key: &str, value: &Value) -> ElementIter<'g, Self::Vertex>;

    /// Edges whose property `key` equals `value`.
    fn edges_by(&'g self, key: &str, value: &Value) -> ElementIter<'g, Self::Edge>;
}
