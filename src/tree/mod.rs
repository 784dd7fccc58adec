//! Path Tree
//!
//! Nodes live in an arena and are reachable two ways: through parent/child
//! edges starting at the root segments, and through a flat index keyed by the
//! canonical key of each node's full path. Both structures store arena handles
//! and are only ever changed together under the tree lock.

pub mod history;
pub mod node;

use crate::config::TreeConfig;
use crate::error::{ApiError, TreeError};
use crate::tree::history::DEFAULT_HISTORY_CAPACITY;
use crate::tree::node::Node;
use crate::types::{self, KEY_SEPARATOR};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Stable handle of a node slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

/// Arena slot: the shared node plus its child edges.
struct Slot<V> {
    node: Arc<Node<V>>,
    children: HashMap<String, NodeId>,
}

/// Structural state guarded by the tree lock.
struct TreeInner<V> {
    slots: Vec<Option<Slot<V>>>,
    free: Vec<NodeId>,
    /// Depth-1 nodes by segment.
    roots: HashMap<String, NodeId>,
    /// Every node by canonical key.
    index: HashMap<String, NodeId>,
}

impl<V> TreeInner<V> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            roots: HashMap::new(),
            index: HashMap::new(),
        }
    }

    fn alloc(&mut self, node: Arc<Node<V>>) -> NodeId {
        let slot = Slot {
            node,
            children: HashMap::new(),
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(slot);
                id
            }
            None => {
                self.slots.push(Some(slot));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<Slot<V>> {
        let slot = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(slot)
    }

    fn slot(&self, id: NodeId) -> Option<&Slot<V>> {
        self.slots.get(id.0)?.as_ref()
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot<V>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    fn node(&self, id: NodeId) -> Option<Arc<Node<V>>> {
        self.slot(id).map(|slot| Arc::clone(&slot.node))
    }

    fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        self.index.get(&types::key(path)).copied()
    }

    /// Ensure every prefix of `path` has a node, creating missing ones from
    /// the first absent ancestor down. Returns the terminal node.
    fn vivify<S: AsRef<str>>(
        &mut self,
        path: &[S],
        history_capacity: usize,
    ) -> Option<Arc<Node<V>>> {
        let mut prefix_key = String::new();
        let mut parent: Option<NodeId> = None;
        let mut created = 0usize;

        for (depth, segment) in path.iter().enumerate() {
            let segment = segment.as_ref();
            if depth > 0 {
                prefix_key.push(KEY_SEPARATOR);
            }
            types::escape_segment_into(&mut prefix_key, segment);

            let id = match self.index.get(&prefix_key) {
                Some(&id) => id,
                None => {
                    let node = Arc::new(Node::new(&path[..depth], segment, None, history_capacity));
                    let id = self.alloc(node);
                    self.index.insert(prefix_key.clone(), id);
                    match parent {
                        Some(parent_id) => {
                            if let Some(slot) = self.slot_mut(parent_id) {
                                slot.children.insert(segment.to_string(), id);
                            }
                        }
                        None => {
                            self.roots.insert(segment.to_string(), id);
                        }
                    }
                    created += 1;
                    id
                }
            };
            parent = Some(id);
        }

        if created > 0 {
            debug!(
                key = %prefix_key,
                created,
                nodes = self.index.len(),
                "Created path nodes"
            );
        }

        parent.and_then(|id| self.node(id))
    }

    /// Remove `id` and all of its descendants from the arena and the index.
    ///
    /// The caller detaches `id` from its parent edge first.
    fn purge(&mut self, id: NodeId) -> (Option<Arc<Node<V>>>, usize) {
        let mut target = None;
        let mut removed = 0usize;
        let mut stack = vec![id];

        while let Some(next) = stack.pop() {
            let Some(slot) = self.release(next) else {
                continue;
            };
            self.index.remove(&slot.node.key());
            stack.extend(slot.children.into_values());
            removed += 1;
            if next == id {
                target = Some(slot.node);
            }
        }

        (target, removed)
    }
}

/// Path-indexed tree of nodes holding bounded value histories.
///
/// Structural operations (`update` creating nodes, `delete`) are serialized by
/// one tree-wide lock. Reading or writing values goes through each node's own
/// lock, so a `get` followed by `peek`/`set` is not atomic: a concurrent
/// `delete` may detach the node in between, after which the handle remains
/// usable but is no longer reachable from the tree.
pub struct Tree<V> {
    inner: Mutex<TreeInner<V>>,
    /// Advisory maximum node count; not enforced.
    capacity: usize,
    history_capacity: usize,
}

impl<V> Tree<V> {
    /// Create an empty tree.
    ///
    /// `capacity` is advisory only and is never used to evict nodes.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacities(capacity, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty tree whose nodes retain `history_capacity` values each.
    pub fn with_capacities(capacity: usize, history_capacity: usize) -> Self {
        Self {
            inner: Mutex::new(TreeInner::new()),
            capacity,
            history_capacity: history_capacity.max(1),
        }
    }

    /// Create an empty tree from validated configuration.
    pub fn with_config(config: &TreeConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self::with_capacities(config.capacity, config.history_capacity))
    }

    /// Push `value` to the node at `path`, creating the node and any missing
    /// ancestors first.
    ///
    /// An empty path or a `None` value is a no-op and returns `None`.
    pub fn update<S: AsRef<str>>(
        &self,
        path: &[S],
        value: impl Into<Option<V>>,
    ) -> Option<Arc<Node<V>>> {
        let value = value.into()?;
        if path.is_empty() {
            return None;
        }

        let node = {
            let mut inner = self.inner.lock();
            match inner.lookup(path) {
                Some(id) => inner.node(id)?,
                None => inner.vivify(path, self.history_capacity)?,
            }
        };
        node.set(value);
        Some(node)
    }

    /// Look up the node at exactly `path`.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<Arc<Node<V>>, TreeError> {
        if path.is_empty() {
            return Err(TreeError::InvalidArgument);
        }
        let inner = self.inner.lock();
        let node = inner.lookup(path).and_then(|id| inner.node(id));
        trace!(key = %types::key(path), found = node.is_some(), "Path lookup");
        node.ok_or_else(|| TreeError::not_found(path))
    }

    /// Remove the node at `path` together with its whole subtree.
    ///
    /// Returns the removed node, or `None` if nothing exists at `path`.
    /// Ancestors and siblings are left in place.
    pub fn delete<S: AsRef<str>>(&self, path: &[S]) -> Option<Arc<Node<V>>> {
        let (last, parent_path) = path.split_last()?;
        let last = last.as_ref();

        let mut inner = self.inner.lock();
        let id = inner.lookup(path)?;

        if parent_path.is_empty() {
            inner.roots.remove(last);
        } else if let Some(parent_id) = inner.lookup(parent_path) {
            if let Some(parent) = inner.slot_mut(parent_id) {
                parent.children.remove(last);
            }
        }

        let (node, removed) = inner.purge(id);
        debug!(
            key = %types::key(path),
            removed,
            nodes = inner.index.len(),
            "Deleted path subtree"
        );
        node
    }

    /// Whether a node exists at exactly `path`.
    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        !path.is_empty() && self.inner.lock().lookup(path).is_some()
    }

    /// Child segments of the node at `path`, sorted.
    pub fn children<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<String>, TreeError> {
        if path.is_empty() {
            return Err(TreeError::InvalidArgument);
        }
        let inner = self.inner.lock();
        let slot = inner
            .lookup(path)
            .and_then(|id| inner.slot(id))
            .ok_or_else(|| TreeError::not_found(path))?;
        let mut children: Vec<String> = slot.children.keys().cloned().collect();
        children.sort();
        Ok(children)
    }

    /// Top-level segments, sorted.
    pub fn root_segments(&self) -> Vec<String> {
        let mut roots: Vec<String> = self.inner.lock().roots.keys().cloned().collect();
        roots.sort();
        roots
    }

    /// Canonical keys of every node in the tree, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.lock().index.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of nodes at all depths.
    pub fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().index.is_empty()
    }

    /// Advisory node capacity given at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values each node retains.
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Drop every node. Outstanding handles stay valid but become detached.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let removed = inner.index.len();
        *inner = TreeInner::new();
        debug!(removed, "Cleared tree");
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<V> std::fmt::Debug for Tree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.len())
            .field("capacity", &self.capacity)
            .field("history_capacity", &self.history_capacity)
            .finish()
    }
}
