//! Driving a game between two players.
//!
//! The search works on throwaway clones. A [`Session`] owns the one
//! authoritative live state: moves are replayed on it by operator index,
//! whoever proposed them.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gametree::games::TwentyOne;
//! use rust_gametree::search::FixedDepthSearch;
//! use rust_gametree::session::Session;
//!
//! let mut session = Session::new(TwentyOne::new());
//! session.play_engine(&mut FixedDepthSearch::with_depth(4)).unwrap();
//! assert_eq!(session.state().total(), 1);
//! ```

mod matchup;
mod player;
#[allow(clippy::module_inception)]
mod session;

pub use matchup::{play_match, MatchRecord};
pub use player::{EnginePlayer, Player, RandomPlayer};
pub use session::{Move, Scorer, Session};
