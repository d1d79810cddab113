//! Pagination window over the count of matching elements.

/// Skip/take window, expressed as bounds on the running count of elements
/// that passed every condition.
///
/// The `n`-th passing element (1-indexed) is emitted iff `start < n <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u64,
    end: u64,
}

impl Default for PageRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl PageRange {
    /// No skip, no limit.
    pub fn unbounded() -> Self {
        Self {
            start: 0,
            end: u64::MAX,
        }
    }

    /// The first `take` matches.
    pub fn take(take: u64) -> Self {
        Self { start: 0, end: take }
    }

    /// Skip `skip` matches, then take up to `take`.
    pub fn skip_take(skip: u64, take: u64) -> Self {
        Self {
            start: skip,
            end: skip.saturating_add(take),
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start == 0 && self.end == u64::MAX
    }

    /// Whether the `count`-th passing element falls inside the window.
    pub fn accepts(&self, count: u64) -> bool {
        self.start < count && count <= self.end
    }

    /// Whether no element after the `count`-th can fall inside the window.
    pub fn is_closed(&self, count: u64) -> bool {
        count >= self.end
    }
}
