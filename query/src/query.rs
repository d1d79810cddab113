//! The fluent query builder.

use sift_core::{ElementIter, ElementKind, Graph, KeyIndex, Value};
use tracing::debug;

use crate::{
    Compare, Condition, FilteredIter, MergeIter, PageRange, QueryConfig, QueryPlanner, ScanPlan,
};

/// The key-index capability of a backend `G`, as a trait object.
type IndexOf<'g, G> =
    dyn KeyIndex<'g, Vertex = <G as Graph<'g>>::Vertex, Edge = <G as Graph<'g>>::Edge> + 'g;

/// Collects conditions and a pagination window, then runs them against a graph.
///
/// Builder methods only record state; nothing is validated until elements
/// are pulled. Each terminal call plans afresh and returns an independent
/// iterator, so one builder can be run several times.
///
/// # Example
///
/// ```ignore
/// let reds: Vec<_> = GraphQuery::new(&graph)
///     .has("color", "red")
///     .limit(10)
///     .vertices()
///     .collect::<Result<_, _>>()?;
/// ```
pub struct GraphQuery<'g, G: Graph<'g> + ?Sized> {
    graph: &'g G,
    config: QueryConfig,
    conditions: Vec<Condition>,
    range: PageRange,
}

impl<'g, G: Graph<'g> + ?Sized> GraphQuery<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, QueryConfig::default())
    }

    pub fn with_config(graph: &'g G, config: QueryConfig) -> Self {
        Self {
            graph,
            config,
            conditions: Vec::new(),
            range: PageRange::unbounded(),
        }
    }

    // ==================== Conditions ====================

    /// Property `key` equals `value`.
    pub fn has(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.condition(Condition::equal(key, value))
    }

    /// Property `key` equals any of `values`.
    pub fn has_any<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.condition(Condition::new(key, Compare::Equal, values))
    }

    /// Property `key` does not equal `value`.
    pub fn has_not(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.condition(Condition::not_equal(key, value))
    }

    /// Property `key` equals none of `values`.
    pub fn has_none<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.condition(Condition::new(key, Compare::NotEqual, values))
    }

    pub fn has_cmp(
        &mut self,
        key: impl Into<String>,
        compare: Compare,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.condition(Condition::new(key, compare, [value.into()]))
    }

    /// Property `key` is present.
    pub fn has_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.condition(Condition::not_equal(key, Value::Null))
    }

    /// Property `key` is absent.
    pub fn has_no_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.condition(Condition::equal(key, Value::Null))
    }

    /// `start <= key < end`.
    pub fn interval(
        &mut self,
        key: impl Into<String>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> &mut Self {
        let key = key.into();
        self.has_cmp(key.clone(), Compare::GreaterThanEqual, start)
            .has_cmp(key, Compare::LessThan, end)
    }

    pub fn condition(&mut self, condition: Condition) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    // ==================== Pagination ====================

    /// Emit at most `take` matches.
    pub fn limit(&mut self, take: u64) -> &mut Self {
        self.range = PageRange::take(take);
        self
    }

    /// Skip `skip` matches, then emit at most `take`.
    pub fn limit_range(&mut self, skip: u64, take: u64) -> &mut Self {
        self.range = PageRange::skip_take(skip, take);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn range(&self) -> PageRange {
        self.range
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    // ==================== Execution ====================

    /// How elements of `kind` would be sourced.
    pub fn plan(&self, kind: ElementKind) -> ScanPlan {
        let keys = self.key_index().map(|index| index.indexed_keys(kind));
        QueryPlanner::new(&self.config).plan(kind, &self.conditions, keys.as_ref())
    }

    /// Matching vertices.
    pub fn vertices(&self) -> FilteredIter<'g, G::Vertex> {
        let source = self.source(
            ElementKind::Vertex,
            |graph| graph.vertices(),
            |index, key, value| index.vertices_by(key, value),
        );
        FilteredIter::new(source, self.conditions.clone(), self.range)
    }

    /// Matching edges.
    pub fn edges(&self) -> FilteredIter<'g, G::Edge> {
        let source = self.source(
            ElementKind::Edge,
            |graph| graph.edges(),
            |index, key, value| index.edges_by(key, value),
        );
        FilteredIter::new(source, self.conditions.clone(), self.range)
    }

    fn key_index(&self) -> Option<&'g IndexOf<'g, G>> {
        if self.config.use_key_index {
            self.graph.key_index()
        } else {
            None
        }
    }

    fn source<E: 'g>(
        &self,
        kind: ElementKind,
        scan: fn(&'g G) -> ElementIter<'g, E>,
        lookup: fn(&'g IndexOf<'g, G>, &str, &Value) -> ElementIter<'g, E>,
    ) -> ElementIter<'g, E> {
        match (self.plan(kind), self.key_index()) {
            (ScanPlan::IndexLookup { key, values }, Some(index)) => {
                debug!(%kind, %key, lookups = values.len(), "opening index lookups");
                Box::new(MergeIter::new(
                    values
                        .into_iter()
                        .map(move |value| lookup(index, &key, &value)),
                ))
            }
            _ => scan(self.graph),
        }
    }
}
