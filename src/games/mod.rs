//! Reference games.
//!
//! Each game implements [`GameState`](crate::core::GameState) with the
//! scoring convention the search expects: a position is scored for the side
//! that just moved into it, and a confirmed win scores
//! [`WIN_SCORE`](crate::core::WIN_SCORE).
//!
//! - [`TicTacToe`]: 3×3 noughts and crosses
//! - [`TwentyOne`]: counting race to a target total
//! - [`FoxAndHounds`]: one fox against four hounds on a checkerboard
//! - [`RingSum`]: taking tokens from a ring for points

mod fox_and_hounds;
mod ring_sum;
mod tictactoe;
mod twenty_one;

pub use fox_and_hounds::{FoxAndHounds, Square};
pub use ring_sum::RingSum;
pub use tictactoe::{Cell, TicTacToe};
pub use twenty_one::TwentyOne;
