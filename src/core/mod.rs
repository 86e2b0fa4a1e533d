//! Core engine types: the game state trait, operators, players, RNG.
//!
//! This module contains the game-agnostic building blocks. Games plug in by
//! implementing [`GameState`]; nothing here knows about any concrete game.

pub mod operator;
pub mod player;
pub mod rng;
pub mod state;

pub use operator::OperatorId;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{is_loss_score, is_win_score, GameState, WIN_SCORE};
