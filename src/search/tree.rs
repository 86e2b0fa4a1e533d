//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode<S>>` with index-based references, so parent
//! links carry no ownership and the whole tree of one search is dropped at
//! once.

use smallvec::SmallVec;
use tracing::trace;

use super::node::{NodeId, Perspective, SearchNode};
use crate::core::{GameState, OperatorId};

/// Arena-based search tree.
///
/// Every node is created either as the root or by expanding its parent, so a
/// node's state is always its parent's state with exactly one operator
/// applied. Nodes are never shared between parents.
#[derive(Clone, Debug)]
pub struct GameTree<S> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> GameTree<S> {
    /// Create a new tree whose root wraps `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Expand a node into all legally reachable children.
    ///
    /// For each operator in ascending order, the node's state is cloned and
    /// the operator applied to the clone; the child is kept iff the operator
    /// was accepted. Children are scored from `perspective`. Calling this
    /// again replaces the previous children (the old ones stay in the arena
    /// but are no longer reachable from this node).
    pub fn expand(&mut self, id: NodeId, perspective: Perspective) -> &[NodeId] {
        let parent = self.get(id);
        let depth = parent.depth() + 1;
        let candidates: Vec<(OperatorId, S)> = OperatorId::all(parent.state().operator_count())
            .filter_map(|op| {
                let mut state = parent.state().clone();
                state.apply_operator(op).then_some((op, state))
            })
            .collect();

        let mut children: SmallVec<[NodeId; 8]> = SmallVec::new();
        for (op, state) in candidates {
            children.push(self.alloc(SearchNode::child(state, id, depth, op, perspective)));
        }
        trace!(node = %id, depth, children = children.len(), "expanded");

        let node = &mut self.nodes[id.0 as usize];
        node.children = children;
        node.expanded = true;
        &node.children
    }

    /// Children of a node from its most recent expansion.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    /// Parent of a node (NONE for the root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.get(id).parent()
    }

    /// Walk from `id` up to the root, starting with `id` itself.
    pub fn path_to_root(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |&n| {
            let parent = self.parent(n);
            (!parent.is_none()).then_some(parent)
        })
    }

    /// Find the node directly below `ancestor` on the path from `leaf`.
    ///
    /// Returns `None` if `leaf` is `ancestor` itself or does not descend from it.
    #[must_use]
    pub fn ancestor_below(&self, leaf: NodeId, ancestor: NodeId) -> Option<NodeId> {
        self.path_to_root(leaf).find(|&n| self.parent(n) == ancestor)
    }

    /// Operators applied from the root to reach `id`, in play order.
    #[must_use]
    pub fn line_to(&self, id: NodeId) -> Vec<OperatorId> {
        let mut line: Vec<OperatorId> = self
            .path_to_root(id)
            .filter_map(|n| self.get(n).operator())
            .collect();
        line.reverse();
        line
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true; the root always exists).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(SearchNode::depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal()).count(),
            expanded_count: self.nodes.iter().filter(|n| n.is_expanded()).count(),
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

/// Statistics about a search tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Number of nodes that were expanded.
    pub expanded_count: usize,
}

impl TreeStats {
    /// Average number of children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / self.expanded_count as f64
        }
    }
}
