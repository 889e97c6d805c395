//! Search nodes and the arena which owns them.
//!
//! Nodes refer to their parent by index into a [SearchTree],
//! so a node never owns its ancestors and the tree only grows
//! forward from the root.

use std::fmt;

/// Index of a node within a [SearchTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A state discovered during a search, along with the
/// context in which it was discovered.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<NodeId>,
    cost: f64,
    heuristic: f64,
}

impl<S> SearchNode<S> {
    /// The state this node represents.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Accumulated path cost from the root (g).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Estimated remaining cost to the goal (h).
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Estimated total cost of a path through this node (g + h).
    ///
    /// Priority frontiers pop the node with the smallest estimate first.
    pub fn estimate(&self) -> f64 {
        self.cost + self.heuristic
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only arena of every node created by a single search.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> Default for SearchTree<S> {
    fn default() -> Self {
        SearchTree { nodes: Vec::new() }
    }
}

impl<S> SearchTree<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root node with zero cost.
    pub fn root(&mut self, state: S, heuristic: f64) -> NodeId {
        self.insert(SearchNode {
            state,
            parent: None,
            cost: 0.0,
            heuristic,
        })
    }

    /// Insert a node discovered by expanding `parent`.
    ///
    /// # Panics
    ///
    /// When `parent` does not belong to this tree.
    pub fn child(&mut self, parent: NodeId, state: S, cost: f64, heuristic: f64) -> NodeId {
        assert!(
            parent.0 < self.nodes.len(),
            "parent {} is not in this tree",
            parent
        );
        self.insert(SearchNode {
            state,
            parent: Some(parent),
            cost,
            heuristic,
        })
    }

    fn insert(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Get the node with this id.
    ///
    /// # Panics
    ///
    /// When `id` does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from a node back up to the root, starting with the node itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }
}

/// Iterator over a node and its ancestors, ending at the root.
#[derive(Debug)]
pub struct Ancestors<'t, S> {
    tree: &'t SearchTree<S>,
    next: Option<NodeId>,
}

impl<'t, S> Iterator for Ancestors<'t, S> {
    type Item = &'t SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?);
        // Parents always have a smaller index than their children,
        // so this walk strictly decreases and must reach the root.
        self.next = node.parent;
        Some(node)
    }
}
