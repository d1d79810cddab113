//! Concatenation of element sources.

use sift_core::ElementIter;
use std::iter::FusedIterator;

/// Yields every element of the first source, then of the second, and so on.
///
/// Sources are opened one at a time, when the previous one runs dry, and
/// each is dropped as soon as it is drained. Elements are not
/// deduplicated: an element produced by two sources is yielded twice.
pub struct MergeIter<'g, E> {
    pending: Box<dyn Iterator<Item = ElementIter<'g, E>> + 'g>,
    current: Option<ElementIter<'g, E>>,
}

impl<'g, E> MergeIter<'g, E> {
    pub fn new<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = ElementIter<'g, E>>,
        I::IntoIter: 'g,
    {
        Self {
            pending: Box::new(sources.into_iter().fuse()),
            current: None,
        }
    }
}

impl<E> Iterator for MergeIter<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        loop {
            if let Some(source) = self.current.as_mut() {
                if let Some(element) = source.next() {
                    return Some(element);
                }
                self.current = None;
            }
            self.current = Some(self.pending.next()?);
        }
    }
}

impl<E> FusedIterator for MergeIter<'_, E> {}
