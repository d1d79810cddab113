//! Instrumented backends.

use sift_core::{ElementIter, ElementKind, Graph, KeyIndex, Properties, Value};
use std::cell::Cell;
use std::collections::HashSet;

/// A backend over plain property rows that counts its reads.
///
/// Edges are empty. `pulled` counts elements handed out by scans and
/// lookups together; `opened` counts scans and lookups started.
pub struct CountingGraph {
    rows: Vec<Properties>,
    indexed: HashSet<String>,
    pulled: Cell<usize>,
    opened: Cell<usize>,
}

impl CountingGraph {
    pub fn new(rows: Vec<Properties>) -> Self {
        Self {
            rows,
            indexed: HashSet::new(),
            pulled: Cell::new(0),
            opened: Cell::new(0),
        }
    }

    /// Expose an exact index on `key`.
    pub fn with_index(mut self, key: &str) -> Self {
        self.indexed.insert(key.to_string());
        self
    }

    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }

    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    fn counted<'g, I>(&'g self, rows: I) -> ElementIter<'g, &'g Properties>
    where
        I: Iterator<Item = &'g Properties> + 'g,
    {
        self.opened.set(self.opened.get() + 1);
        Box::new(rows.inspect(move |_| self.pulled.set(self.pulled.get() + 1)))
    }
}

impl<'g> Graph<'g> for CountingGraph {
    type Vertex = &'g Properties;
    type Edge = &'g Properties;

    fn vertices(&'g self) -> ElementIter<'g, Self::Vertex> {
        self.counted(self.rows.iter())
    }

    fn edges(&'g self) -> ElementIter<'g, Self::Edge> {
        Box::new(std::iter::empty())
    }

    fn key_index(&'g self) -> Option<&'g dyn KeyIndex<'g, Vertex = Self::Vertex, Edge = Self::Edge>> {
        if self.indexed.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl<'g> KeyIndex<'g> for CountingGraph {
    type Vertex = &'g Properties;
    type Edge = &'g Properties;

    fn indexed_keys(&self, kind: ElementKind) -> HashSet<String> {
        match kind {
            ElementKind::Vertex => self.indexed.clone(),
            ElementKind::Edge => HashSet::new(),
        }
    }

    fn vertices_by(&'g self, key: &str, value: &Value) -> ElementIter<'g, Self::Vertex> {
        let (key, value) = (key.to_string(), value.clone());
        self.counted(
            self.rows
                .iter()
                .filter(move |row| row.get(&key).unwrap_or(&Value::Null) == &value),
        )
    }

    fn edges_by(&'g self, _key: &str, _value: &Value) -> ElementIter<'g, Self::Edge> {
        Box::new(std::iter::empty())
    }
}

/// A backend whose index claims every key and answers every lookup with
/// all of its rows.
pub struct LyingIndexGraph {
    rows: Vec<Properties>,
}

impl LyingIndexGraph {
    pub fn new(rows: Vec<Properties>) -> Self {
        Self { rows }
    }
}

impl<'g> Graph<'g> for LyingIndexGraph {
    type Vertex = &'g Properties;
    type Edge = &'g Properties;

    fn vertices(&'g self) -> ElementIter<'g, Self::Vertex> {
        Box::new(self.rows.iter())
    }

    fn edges(&'g self) -> ElementIter<'g, Self::Edge> {
        Box::new(self.rows.iter())
    }

    fn key_index(&'g self) -> Option<&'g dyn KeyIndex<'g, Vertex = Self::Vertex, Edge = Self::Edge>> {
        Some(self)
    }
}

impl<'g> KeyIndex<'g> for LyingIndexGraph {
    type Vertex = &'g Properties;
    type Edge = &'g Properties;

    fn indexed_keys(&self, _kind: ElementKind) -> HashSet<String> {
        self.rows.iter().flat_map(|row| row.keys().cloned()).collect()
    }

    fn vertices_by(&'g self, _key: &str, _value: &Value) -> ElementIter<'g, Self::Vertex> {
        Box::new(self.rows.iter())
    }

    fn edges_by(&'g self, _key: &str, _value: &Value) -> ElementIter<'g, Self::Edge> {
        Box::new(self.rows.iter())
    }
}
