//! Bounded value history
//!
//! Fixed-capacity FIFO ring used by every tree node. Once full, each push
//! evicts the oldest entry.

use std::collections::VecDeque;

/// Default number of values retained per node.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Fixed-capacity circular history of values, oldest first.
#[derive(Debug, Clone)]
pub struct History<V> {
    capacity: usize,
    entries: VecDeque<V>,
}

impl<V> History<V> {
    /// Create an empty history holding at most `capacity` values.
    ///
    /// A capacity of zero is raised to one so the newest value is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a value, returning the evicted oldest value if the history was full.
    pub fn push(&mut self, value: V) -> Option<V> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(value);
        evicted
    }

    /// Most recently pushed value.
    pub fn peek(&self) -> Option<&V> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter()
    }
}

impl<V> Default for History<V> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
