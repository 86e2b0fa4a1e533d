//! Search tree nodes.
//!
//! Uses arena-based allocation with index references (`NodeId`). A node owns
//! its game state exclusively and refers to its parent by index only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::OnceCell;

use crate::core::{GameState, OperatorId};

/// Index into the `GameTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Whose interest a node's value is expressed in.
///
/// Children produced while maximizing are scored for the player asking for
/// advice (`+1`); children produced while minimizing are scored against them
/// (`-1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    Maximizing,
    Minimizing,
}

impl Perspective {
    /// The sign applied to the raw heuristic.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Perspective::Maximizing => 1,
            Perspective::Minimizing => -1,
        }
    }

    /// The role of the next ply.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }
}

/// A node in the search tree.
///
/// Parent, depth, originating operator and perspective are fixed at
/// construction. The value is computed on first request and cached; the state
/// never changes after the node is built, so it is never recomputed.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    /// The game state reached at this node.
    state: S,

    /// Parent node (NONE for root).
    parent: NodeId,

    /// Depth in tree (root = 0).
    depth: u16,

    /// Operator applied to the parent's state to reach this node.
    operator: Option<OperatorId>,

    /// Sign the heuristic is scored with.
    perspective: Perspective,

    /// Memoized signed heuristic.
    value: OnceCell<i32>,

    /// Children from the most recent expansion, in operator order.
    pub(crate) children: SmallVec<[NodeId; 8]>,

    /// Has this node been expanded at least once?
    pub(crate) expanded: bool,
}

impl<S: GameState> SearchNode<S> {
    /// Create a root node wrapping the starting state.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: NodeId::NONE,
            depth: 0,
            operator: None,
            perspective: Perspective::Maximizing,
            value: OnceCell::new(),
            children: SmallVec::new(),
            expanded: false,
        }
    }

    /// Create a child node.
    ///
    /// `state` must already be the parent's state with `operator` applied.
    pub fn child(
        state: S,
        parent: NodeId,
        depth: u16,
        operator: OperatorId,
        perspective: Perspective,
    ) -> Self {
        Self {
            state,
            parent,
            depth,
            operator: Some(operator),
            perspective,
            value: OnceCell::new(),
            children: SmallVec::new(),
            expanded: false,
        }
    }

    /// The wrapped game state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Parent node (NONE for root).
    #[inline]
    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Depth in tree (root = 0).
    #[inline]
    #[must_use]
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Operator that produced this node from its parent (None for root).
    #[inline]
    #[must_use]
    pub fn operator(&self) -> Option<OperatorId> {
        self.operator
    }

    /// Perspective this node is scored from.
    #[inline]
    #[must_use]
    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    /// Check if the wrapped state is terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Signed heuristic value, computed once.
    #[must_use]
    pub fn value(&self) -> i32 {
        *self
            .value
            .get_or_init(|| self.state.heuristic() * self.perspective.sign())
    }

    /// Check if the value has been computed yet.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Children from the most recent expansion.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Check if this node has been expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
