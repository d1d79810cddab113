//! Lazy filtered iteration.

use sift_core::{Element, ElementIter};
use std::iter::FusedIterator;
use tracing::trace;

use crate::{Condition, PageRange, QueryError, QueryResult};

/// Buffer state of a [`FilteredIter`].
enum State<E> {
    /// Nothing buffered; more matches may remain.
    Empty,
    /// One element that passed every condition and lies in the window.
    Buffered(E),
    /// Source drained, window closed, or a condition failed to evaluate.
    Exhausted,
}

/// Applies conditions and a pagination window to an element source.
///
/// All work happens on pull: constructing the iterator reads nothing.
/// The window counts elements that pass every condition, not elements
/// read from the source. Once no further element can be emitted the
/// source is dropped without being read to the end.
///
/// The iterator is fused. If evaluating a condition fails, the error is
/// returned from that call and the iterator is exhausted afterwards.
pub struct FilteredIter<'g, E> {
    source: Option<ElementIter<'g, E>>,
    conditions: Vec<Condition>,
    range: PageRange,
    /// Elements that passed every condition so far.
    matched: u64,
    state: State<E>,
}

impl<'g, E: Element> FilteredIter<'g, E> {
    pub fn new(source: ElementIter<'g, E>, conditions: Vec<Condition>, range: PageRange) -> Self {
        Self {
            source: Some(source),
            conditions,
            range,
            matched: 0,
            state: State::Empty,
        }
    }

    /// Whether another element is available, advancing the source if needed.
    pub fn has_next(&mut self) -> QueryResult<bool> {
        match self.state {
            State::Buffered(_) => Ok(true),
            State::Exhausted => Ok(false),
            State::Empty => self.advance(),
        }
    }

    /// Return the next element, or [`QueryError::NoSuchElement`] if there is none.
    pub fn next_element(&mut self) -> QueryResult<E> {
        if !self.has_next()? {
            return Err(QueryError::NoSuchElement);
        }
        self.take_buffered().ok_or(QueryError::NoSuchElement)
    }

    /// Query results are read-only.
    pub fn remove(&mut self) -> QueryResult<()> {
        Err(QueryError::unsupported("remove"))
    }

    /// Number of elements that passed every condition so far, including skipped ones.
    pub fn matched(&self) -> u64 {
        self.matched
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    fn take_buffered(&mut self) -> Option<E> {
        match std::mem::replace(&mut self.state, State::Empty) {
            State::Buffered(element) => Some(element),
            other => {
                self.state = other;
                None
            }
        }
    }

    fn advance(&mut self) -> QueryResult<bool> {
        loop {
            if self.range.is_closed(self.matched) {
                trace!(matched = self.matched, "pagination window closed");
                self.finish();
                return Ok(false);
            }

            let Some(candidate) = self.source.as_mut().and_then(|source| source.next()) else {
                trace!(matched = self.matched, "element source drained");
                self.finish();
                return Ok(false);
            };

            match self.passes(&candidate) {
                Ok(true) => {
                    self.matched += 1;
                    if self.range.accepts(self.matched) {
                        self.state = State::Buffered(candidate);
                        return Ok(true);
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    self.finish();
                    return Err(e);
                }
            }
        }
    }

    fn passes(&self, candidate: &E) -> QueryResult<bool> {
        for condition in &self.conditions {
            if !condition.evaluate(candidate)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn finish(&mut self) {
        self.state = State::Exhausted;
        self.source = None;
    }
}

impl<E: Element> Iterator for FilteredIter<'_, E> {
    type Item = QueryResult<E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.take_buffered().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<E: Element> FusedIterator for FilteredIter<'_, E> {}
