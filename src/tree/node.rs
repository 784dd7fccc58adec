//! Tree node with bounded value history

use crate::tree::history::History;
use crate::types::{self, Path};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Value state guarded by the node lock.
#[derive(Debug)]
struct NodeState<V> {
    history: History<V>,
    updated_at: DateTime<Utc>,
}

/// A single path in the tree and the recent values pushed for it.
///
/// The node stores its full path from creation, so a handle stays meaningful
/// after it has been detached from the tree by a delete.
#[derive(Debug)]
pub struct Node<V> {
    path: Path,
    created_at: DateTime<Utc>,
    state: Mutex<NodeState<V>>,
}

impl<V> Node<V> {
    /// Create the node for `parent_path + [segment]`.
    ///
    /// `initial` is recorded as the first history entry when present.
    pub fn new<S: AsRef<str>>(
        parent_path: &[S],
        segment: &str,
        initial: Option<V>,
        history_capacity: usize,
    ) -> Self {
        let mut path = types::to_path(parent_path);
        path.push(segment.to_string());

        let now = Utc::now();
        let mut history = History::new(history_capacity);
        if let Some(value) = initial {
            history.push(value);
        }

        Self {
            path,
            created_at: now,
            state: Mutex::new(NodeState {
                history,
                updated_at: now,
            }),
        }
    }

    /// Push `value` into the history. If the node is at capacity the oldest
    /// value is dropped.
    pub fn set(&self, value: V) {
        let mut state = self.state.lock();
        state.history.push(value);
        state.updated_at = Utc::now();
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Canonical flat-index key of this node's path.
    pub fn key(&self) -> String {
        types::key(&self.path)
    }

    /// Last path segment.
    pub fn segment(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the latest `set`, or creation time if never set.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.state.lock().updated_at
    }

    pub fn len(&self) -> usize {
        self.state.lock().history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.state.lock().history.capacity()
    }
}

impl<V: Clone> Node<V> {
    /// Most recently set value, or `None` if nothing has been set.
    pub fn peek(&self) -> Option<V> {
        self.state.lock().history.peek().cloned()
    }

    /// Snapshot of the retained values, oldest first.
    pub fn history(&self) -> Vec<V> {
        self.state.lock().history.iter().cloned().collect()
    }

    /// Up to `n` of the newest values, newest first.
    pub fn recent(&self, n: usize) -> Vec<V> {
        self.state.lock().history.iter().rev().take(n).cloned().collect()
    }
}
