//! Move sources for a session.

use crate::core::{GameRng, GameState, OperatorId};
use crate::search::{FixedDepthSearch, SearchConfig, SearchStrategy};

/// Something that proposes a move for the side to move.
pub trait Player<S: GameState> {
    /// Pick an operator for `state`, or `None` if there is nothing to play.
    fn choose(&mut self, state: &S) -> Option<OperatorId>;
}

/// Player backed by a fixed-depth search.
#[derive(Clone, Debug)]
pub struct EnginePlayer {
    search: FixedDepthSearch,
}

impl EnginePlayer {
    /// Engine looking `max_depth` plies ahead.
    pub fn new(max_depth: u16) -> Self {
        Self {
            search: FixedDepthSearch::with_depth(max_depth),
        }
    }

    /// Engine with an explicit search configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            search: FixedDepthSearch::new(config),
        }
    }

    /// The underlying search, including stats of its last run.
    #[must_use]
    pub fn search(&self) -> &FixedDepthSearch {
        &self.search
    }
}

impl<S: GameState> Player<S> for EnginePlayer {
    fn choose(&mut self, state: &S) -> Option<OperatorId> {
        self.search.recommend(state).map(|rec| rec.operator)
    }
}

/// Player picking uniformly among the applicable operators.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a new random player with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player drawing from `rng`.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<S: GameState> Player<S> for RandomPlayer {
    fn choose(&mut self, state: &S) -> Option<OperatorId> {
        let ops = state.legal_operators();
        self.rng.choose(&ops).copied()
    }
}
