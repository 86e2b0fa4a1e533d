//! # rust-gametree
//!
//! A fixed-depth adversarial search engine for two-player, perfect-information,
//! deterministic games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees the [`GameState`] trait. Games
//!    expose a fixed, indexed operator set and a heuristic.
//!
//! 2. **Search on Copies**: Every search builds a fresh tree of cloned states.
//!    The caller replays the recommended operator index on its live state.
//!
//! 3. **Deterministic**: Operators are tried in index order and ties keep the
//!    earliest, so equal inputs always give the same recommendation.
//!
//! ## Architecture
//!
//! - **Arena Tree**: Nodes live in a `Vec` and refer to their parent by index.
//!
//! - **Alternating Search**: The side asking for advice maximizes, the
//!   opponent minimizes, down to a depth limit or a terminal state.
//!
//! - **Mover-Relative Scores**: A heuristic scores a position for the side
//!   that produced it; the tree attaches the sign.
//!
//! ## Modules
//!
//! - `core`: Game state trait, operators, players, RNG
//! - `search`: Search tree and the fixed-depth strategy
//! - `session`: Live games, players and matches
//! - `games`: Reference games

pub mod core;
pub mod error;
pub mod games;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    is_loss_score, is_win_score, GameRng, GameState, OperatorId, PlayerId, PlayerMap, WIN_SCORE,
};

pub use crate::error::{Error, Result};

pub use crate::search::{
    recommend_move, FixedDepthSearch, GameTree, NodeId, Recommendation, SearchConfig,
    SearchNode, SearchStats, SearchStrategy,
};

pub use crate::session::{play_match, EnginePlayer, MatchRecord, Player, RandomPlayer, Session};
