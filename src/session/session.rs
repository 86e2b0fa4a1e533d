//! The live game state and its move history.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::{GameState, OperatorId, PlayerId, PlayerMap};
use crate::error::{Error, Result};
use crate::search::{Recommendation, SearchStrategy};

use super::player::Player;

/// Points a move earns, evaluated on the state before the move.
pub type Scorer<S> = Box<dyn Fn(&S, OperatorId) -> i64>;

/// A move that was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerId,
    pub operator: OperatorId,
}

/// Authoritative game in progress.
///
/// Sides alternate starting with `PlayerId::FIRST`. Rejected moves leave the
/// session untouched.
pub struct Session<S: GameState> {
    state: S,
    to_move: PlayerId,
    history: Vec<Move>,
    tallies: PlayerMap<i64>,
    scorer: Option<Scorer<S>>,
}

impl<S: GameState> Session<S> {
    /// Start a session from `state`, first player to move.
    pub fn new(state: S) -> Self {
        Self {
            state,
            to_move: PlayerId::FIRST,
            history: Vec::new(),
            tallies: PlayerMap::with_value(0),
            scorer: None,
        }
    }

    /// Credit each move with the points `scorer` assigns it.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl Fn(&S, OperatorId) -> i64 + 'static) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    /// The live state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Side to move next.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Points collected per player.
    #[must_use]
    pub fn tallies(&self) -> &PlayerMap<i64> {
        &self.tallies
    }

    /// Check if the live state is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Play `op` for the side to move.
    pub fn play(&mut self, op: OperatorId) -> Result<()> {
        if self.state.is_terminal() {
            warn!(player = %self.to_move, operator = %op, "move rejected: game over");
            return Err(Error::GameOver);
        }

        let points = self.scorer.as_ref().map_or(0, |score| score(&self.state, op));
        if !self.state.apply_operator(op) {
            warn!(player = %self.to_move, operator = %op, "move rejected: operator not applicable");
            return Err(Error::IllegalOperator { operator: op });
        }

        debug!(player = %self.to_move, operator = %op, points, "move played");
        self.tallies[self.to_move] += points;
        self.history.push(Move {
            player: self.to_move,
            operator: op,
        });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Let `strategy` pick the move for the side to move, and play it.
    ///
    /// Fails with `GameOver` on a terminal state and `NoLegalMove` when the
    /// strategy has no recommendation.
    #[instrument(level = "debug", skip_all, fields(player = %self.to_move))]
    pub fn play_engine<T: SearchStrategy<S>>(
        &mut self,
        strategy: &mut T,
    ) -> Result<Recommendation> {
        if self.state.is_terminal() {
            return Err(Error::GameOver);
        }
        let rec = strategy.recommend(&self.state).ok_or(Error::NoLegalMove)?;
        self.play(rec.operator)?;
        Ok(rec)
    }

    /// Ask `player` for a move and play it.
    pub fn play_player<P: Player<S> + ?Sized>(&mut self, player: &mut P) -> Result<OperatorId> {
        if self.state.is_terminal() {
            return Err(Error::GameOver);
        }
        let op = player.choose(&self.state).ok_or(Error::NoLegalMove)?;
        self.play(op)?;
        Ok(op)
    }

    /// Consume the session, keeping the state, history and tallies.
    pub fn into_parts(self) -> (S, Vec<Move>, PlayerMap<i64>) {
        (self.state, self.history, self.tallies)
    }
}

impl<S: GameState + std::fmt::Debug> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("to_move", &self.to_move)
            .field("history", &self.history)
            .field("tallies", &self.tallies)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{RingSum, TwentyOne};
    use crate::search::FixedDepthSearch;

    #[test]
    fn test_play_passes_turn() {
        let mut session = Session::new(TwentyOne::new());
        session.play(OperatorId::new(2)).unwrap();

        assert_eq!(session.state().total(), 3);
        assert_eq!(session.to_move(), PlayerId::SECOND);
        assert_eq!(
            session.history(),
            &[Move {
                player: PlayerId::FIRST,
                operator: OperatorId::new(2)
            }]
        );
    }

    #[test]
    fn test_illegal_operator_leaves_session_unchanged() {
        let mut session = Session::new(TwentyOne::new());
        let result = session.play(OperatorId::new(3));

        assert_eq!(
            result,
            Err(Error::IllegalOperator {
                operator: OperatorId::new(3)
            })
        );
        assert_eq!(session.state(), &TwentyOne::new());
        assert_eq!(session.to_move(), PlayerId::FIRST);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut session = Session::new(TwentyOne::with_rules(2, 3).unwrap());
        session.play(OperatorId::new(1)).unwrap();
        assert!(session.is_over());

        assert_eq!(session.play(OperatorId::new(0)), Err(Error::GameOver));
        let mut search = FixedDepthSearch::with_depth(3);
        assert_eq!(session.play_engine(&mut search), Err(Error::GameOver));
    }

    #[test]
    fn test_play_engine_without_lookahead() {
        let mut session = Session::new(TwentyOne::new());
        let mut search = FixedDepthSearch::with_depth(0);

        assert_eq!(session.play_engine(&mut search), Err(Error::NoLegalMove));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_play_engine_replays_on_live_state() {
        let mut session = Session::new(TwentyOne::new());
        let mut search = FixedDepthSearch::with_depth(6);

        let rec = session.play_engine(&mut search).unwrap();

        assert_eq!(rec.operator, OperatorId::new(0));
        assert_eq!(session.state().total(), 1);
        assert_eq!(session.to_move(), PlayerId::SECOND);
    }

    #[test]
    fn test_scorer_credits_mover() {
        let mut session = Session::new(RingSum::new())
            .with_scorer(|state: &RingSum, op| state.token_value(op).map_or(0, i64::from));

        session.play(OperatorId::new(4)).unwrap();
        session.play(OperatorId::new(5)).unwrap();
        // Rejected moves earn nothing.
        assert!(session.play(OperatorId::new(0)).is_err());

        assert_eq!(session.tallies()[PlayerId::FIRST], 8);
        assert_eq!(session.tallies()[PlayerId::SECOND], 6);
    }
}
