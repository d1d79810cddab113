//! In-memory graph storage.

use crate::index::PropertyIndex;
use sift_core::{
    Edge, EdgeId, Element, ElementIter, ElementKind, Graph, GraphError, GraphResult, KeyIndex,
    Properties, Value, Vertex, VertexId,
};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// ID allocator for vertices and edges.
#[derive(Debug)]
struct IdAllocator {
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// The in-memory graph storage.
///
/// Scans and index lookups both yield elements in id order, which is the
/// order they were added in.
#[derive(Debug)]
pub struct MemoryGraph {
    /// Vertex storage
    vertices: BTreeMap<VertexId, Vertex>,
    /// Edge storage
    edges: BTreeMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Vertex key index
    vertex_index: PropertyIndex<VertexId>,
    /// Edge key index
    edge_index: PropertyIndex<EdgeId>,
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            vertex_index: PropertyIndex::new(),
            edge_index: PropertyIndex::new(),
        }
    }

    // ==================== Vertex Operations ====================

    /// Add a vertex with the given properties.
    pub fn add_vertex(&mut self, properties: Properties) -> VertexId {
        let id = self.id_alloc.alloc_vertex_id();
        for (key, value) in &properties {
            self.vertex_index.insert(key, value, id);
        }
        self.vertices.insert(id, Vertex::new(id, properties));
        id
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Set a property on a vertex, returning the previous value.
    pub fn set_vertex_property(
        &mut self,
        id: VertexId,
        key: &str,
        value: Value,
    ) -> GraphResult<Option<Value>> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        if let Some(old_value) = vertex.property(key) {
            self.vertex_index.remove(key, old_value, id);
        }
        self.vertex_index.insert(key, &value, id);

        Ok(vertex.set_property(key, value))
    }

    /// Remove a property from a vertex, returning it.
    pub fn remove_vertex_property(&mut self, id: VertexId, key: &str) -> GraphResult<Option<Value>> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        let old_value = vertex.remove_property(key);
        if let Some(ref value) = old_value {
            self.vertex_index.remove(key, value, id);
        }
        Ok(old_value)
    }

    /// Remove a vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        if !self.vertices.contains_key(&id) {
            return Err(GraphError::VertexNotFound(id));
        }

        let incident: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|edge| edge.involves(id))
            .map(|edge| edge.id)
            .collect();
        for edge_id in incident {
            self.remove_edge(edge_id)?;
        }

        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;
        for (key, value) in &vertex.properties {
            self.vertex_index.remove(key, value, id);
        }
        Ok(vertex)
    }

    // ==================== Edge Operations ====================

    /// Add an edge from `out_vertex` to `in_vertex`.
    pub fn add_edge(
        &mut self,
        out_vertex: VertexId,
        in_vertex: VertexId,
        label: impl Into<String>,
        properties: Properties,
    ) -> GraphResult<EdgeId> {
        for endpoint in [out_vertex, in_vertex] {
            if !self.vertices.contains_key(&endpoint) {
                return Err(GraphError::VertexNotFound(endpoint));
            }
        }

        let id = self.id_alloc.alloc_edge_id();
        for (key, value) in &properties {
            self.edge_index.insert(key, value, id);
        }
        self.edges
            .insert(id, Edge::new(id, out_vertex, in_vertex, label, properties));
        Ok(id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Set a property on an edge, returning the previous value.
    pub fn set_edge_property(
        &mut self,
        id: EdgeId,
        key: &str,
        value: Value,
    ) -> GraphResult<Option<Value>> {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(GraphError::EdgeNotFound(id))?;

        if let Some(old_value) = edge.property(key) {
            self.edge_index.remove(key, old_value, id);
        }
        self.edge_index.insert(key, &value, id);

        Ok(edge.set_property(key, value))
    }

    /// Remove a property from an edge, returning it.
    pub fn remove_edge_property(&mut self, id: EdgeId, key: &str) -> GraphResult<Option<Value>> {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(GraphError::EdgeNotFound(id))?;

        let old_value = edge.remove_property(key);
        if let Some(ref value) = old_value {
            self.edge_index.remove(key, value, id);
        }
        Ok(old_value)
    }

    /// Remove an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self.edges.remove(&id).ok_or(GraphError::EdgeNotFound(id))?;
        for (key, value) in &edge.properties {
            self.edge_index.remove(key, value, id);
        }
        Ok(edge)
    }

    // ==================== Key Indices ====================

    /// Index `key` for the given element kind, covering existing elements.
    pub fn create_key_index(&mut self, key: &str, kind: ElementKind) -> GraphResult<()> {
        match kind {
            ElementKind::Vertex => {
                if !self.vertex_index.create(key) {
                    return Err(GraphError::index_exists(key, kind));
                }
                for vertex in self.vertices.values() {
                    if let Some(value) = vertex.property(key) {
                        self.vertex_index.insert(key, value, vertex.id);
                    }
                }
            }
            ElementKind::Edge => {
                if !self.edge_index.create(key) {
                    return Err(GraphError::index_exists(key, kind));
                }
                for edge in self.edges.values() {
                    if let Some(value) = edge.property(key) {
                        self.edge_index.insert(key, value, edge.id);
                    }
                }
            }
        }
        debug!(key, %kind, "created key index");
        Ok(())
    }

    /// Drop the index on `key` for the given element kind.
    pub fn drop_key_index(&mut self, key: &str, kind: ElementKind) -> GraphResult<()> {
        let dropped = match kind {
            ElementKind::Vertex => self.vertex_index.drop_key(key),
            ElementKind::Edge => self.edge_index.drop_key(key),
        };
        if !dropped {
            return Err(GraphError::index_not_found(key, kind));
        }
        debug!(key, %kind, "dropped key index");
        Ok(())
    }

    /// The keys indexed for the given element kind.
    pub fn indexed_keys(&self, kind: ElementKind) -> HashSet<String> {
        match kind {
            ElementKind::Vertex => self.vertex_index.keys(),
            ElementKind::Edge => self.edge_index.keys(),
        }
    }

    // ==================== Statistics ====================

    /// Get the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Equality as read by a query: an absent property reads as null.
fn property_equals<E: Element>(element: &E, key: &str, value: &Value) -> bool {
    element.property(key).unwrap_or(&Value::Null) == value
}

impl<'g> Graph<'g> for MemoryGraph {
    type Vertex = &'g Vertex;
    type Edge = &'g Edge;

    fn vertices(&'g self) -> ElementIter<'g, Self::Vertex> {
        Box::new(self.vertices.values())
    }

    fn edges(&'g self) -> ElementIter<'g, Self::Edge> {
        Box::new(self.edges.values())
    }

    fn key_index(&'g self) -> Option<&'g dyn KeyIndex<'g, Vertex = Self::Vertex, Edge = Self::Edge>> {
        Some(self)
    }
}

impl<'g> KeyIndex<'g> for MemoryGraph {
    type Vertex = &'g Vertex;
    type Edge = &'g Edge;

    fn indexed_keys(&self, kind: ElementKind) -> HashSet<String> {
        MemoryGraph::indexed_keys(self, kind)
    }

    fn vertices_by(&'g self, key: &str, value: &Value) -> ElementIter<'g, Self::Vertex> {
        match self.vertex_index.lookup(key, value) {
            Some(ids) => Box::new(ids.filter_map(move |id| self.vertices.get(&id))),
            None => {
                let (key, value) = (key.to_string(), value.clone());
                Box::new(
                    self.vertices
                        .values()
                        .filter(move |vertex| property_equals(*vertex, &key, &value)),
                )
            }
        }
    }

    fn edges_by(&'g self, key: &str, value: &Value) -> ElementIter<'g, Self::Edge> {
        match self.edge_index.lookup(key, value) {
            Some(ids) => Box::new(ids.filter_map(move |id| self.edges.get(&id))),
            None => {
                let (key, value) = (key.to_string(), value.clone());
                Box::new(
                    self.edges
                        .values()
                        .filter(move |edge| property_equals(*edge, &key, &value)),
                )
            }
        }
    }
}
