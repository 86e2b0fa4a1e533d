//! Fixed-depth adversarial search.
//!
//! ## Overview
//!
//! - **Arena tree**: `GameTree` stores `SearchNode`s in a flat vector; parent
//!   links are indices, so no node owns its parent.
//! - **Lazy values**: a node's signed heuristic is computed on first request
//!   and cached. The sign is fixed when the node is created.
//! - **Deterministic**: children are visited in operator order and ties keep
//!   the earliest child, so equal inputs give equal recommendations.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gametree::core::GameState;
//! use rust_gametree::games::TicTacToe;
//! use rust_gametree::search::{FixedDepthSearch, SearchConfig, SearchStrategy};
//!
//! let mut live = TicTacToe::new();
//! let mut search = FixedDepthSearch::new(SearchConfig::default().with_max_depth(4));
//!
//! if let Some(rec) = search.recommend(&live) {
//!     // The tree searched clones; replay the operator on the live state.
//!     assert!(live.apply_operator(rec.operator));
//! }
//! ```

pub mod config;
pub mod node;
pub mod stats;
pub mod strategy;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use node::{NodeId, Perspective, SearchNode};
pub use stats::SearchStats;
pub use strategy::{recommend_move, Choice, FixedDepthSearch, Recommendation, SearchStrategy};
pub use tree::{GameTree, TreeStats};
