//! Move recommendation strategies.
//!
//! Implements a fixed-depth alternating maximization search (NegaMax style,
//! without pruning). The player asking for advice is to move at the start
//! node; plies alternate between maximizing and minimizing that player's
//! value until the depth limit, a terminal state or a dead end is reached.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{GameState, OperatorId};

use super::config::SearchConfig;
use super::node::{NodeId, Perspective};
use super::stats::SearchStats;
use super::tree::GameTree;

/// Result of a strategy's choice inside a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// The recommended node, an immediate child of the start node.
    pub node: NodeId,

    /// The leaf whose value decided the choice.
    pub leaf: NodeId,
}

/// A recommended move, detached from the (throwaway) search tree.
///
/// `operator` is meant to be replayed against the caller's live state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    /// Operator that produces the recommended position.
    pub operator: OperatorId,

    /// Signed value of the leaf the choice was based on.
    pub score: i32,

    /// Length of the principal line that was evaluated.
    pub plies: u16,
}

/// A strategy recommending a move for the player to move at `start`.
pub trait SearchStrategy<S: GameState> {
    /// Choose the next node from `start`.
    ///
    /// Returns `None` if `start` is terminal, a dead end, or no lookahead
    /// happened.
    fn choose(&mut self, tree: &mut GameTree<S>, start: NodeId) -> Option<Choice>;

    /// Search a fresh tree rooted at a clone of `state`.
    #[instrument(level = "debug", skip_all)]
    fn recommend(&mut self, state: &S) -> Option<Recommendation> {
        let mut tree = GameTree::new(state.clone());
        let root = tree.root();
        let choice = self.choose(&mut tree, root)?;

        let node = tree.get(choice.node);
        let leaf = tree.get(choice.leaf);
        Some(Recommendation {
            operator: node.operator()?,
            score: leaf.value(),
            plies: leaf.depth() - tree.get(root).depth(),
        })
    }
}

/// Fixed-depth adversarial search.
///
/// Children are visited in operator order and replaced only on a strictly
/// better value, so ties go to the lowest operator index.
#[derive(Clone, Debug, Default)]
pub struct FixedDepthSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl FixedDepthSearch {
    /// Create a new search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Create a new search looking `max_depth` plies ahead.
    pub fn with_depth(max_depth: u16) -> Self {
        Self::new(SearchConfig::default().with_max_depth(max_depth))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search one ply in the given role and return the chosen leaf.
    fn step<S: GameState>(
        &mut self,
        tree: &mut GameTree<S>,
        id: NodeId,
        limit: u16,
        role: Perspective,
    ) -> NodeId {
        let node = tree.get(id);
        if node.depth() >= limit || node.is_terminal() {
            self.stats.leaves += 1;
            return id;
        }

        let depth = node.depth() + 1;
        let children: SmallVec<[NodeId; 8]> = SmallVec::from_slice(tree.expand(id, role));
        self.stats.nodes_expanded += 1;
        self.stats.nodes_created += children.len() as u64;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let mut best: Option<(NodeId, i32)> = None;
        for child in children {
            let leaf = self.step(tree, child, limit, role.flip());
            let value = tree.get(leaf).value();
            let better = match (best, role) {
                (None, _) => true,
                (Some((_, b)), Perspective::Maximizing) => value > b,
                (Some((_, b)), Perspective::Minimizing) => value < b,
            };
            if better {
                best = Some((leaf, value));
            }
        }

        match best {
            Some((leaf, _)) => leaf,
            None => {
                // Dead end: no operator applies.
                self.stats.leaves += 1;
                id
            }
        }
    }
}

impl<S: GameState> SearchStrategy<S> for FixedDepthSearch {
    fn choose(&mut self, tree: &mut GameTree<S>, start: NodeId) -> Option<Choice> {
        let timer = Instant::now();
        self.stats.reset();

        let start_depth = tree.get(start).depth();
        let limit = start_depth.saturating_add(self.config.max_depth);
        let leaf = self.step(tree, start, limit, Perspective::Maximizing);

        self.stats.max_depth = self.stats.max_depth.saturating_sub(start_depth);
        self.stats.time_us = timer.elapsed().as_micros() as u64;

        let node = tree.ancestor_below(leaf, start);
        debug!(
            max_depth = self.config.max_depth,
            nodes = self.stats.nodes_created,
            leaves = self.stats.leaves,
            time_us = self.stats.time_us,
            recommended = ?node.and_then(|n| tree.get(n).operator()),
            "search finished"
        );

        node.map(|node| Choice { node, leaf })
    }
}

/// Recommend a move for the player to move in `state`, looking `depth` plies ahead.
///
/// Returns `None` when there is no legal move, the state is terminal, or
/// `depth` is 0.
///
/// ```
/// use rust_gametree::games::TwentyOne;
/// use rust_gametree::search::recommend_move;
///
/// let rec = recommend_move(&TwentyOne::new(), 6).unwrap();
/// assert_eq!(rec.operator.index(), 0); // say 1
/// ```
#[instrument(level = "debug", skip(state))]
pub fn recommend_move<S: GameState>(state: &S, depth: u16) -> Option<Recommendation> {
    FixedDepthSearch::with_depth(depth).recommend(state)
}
