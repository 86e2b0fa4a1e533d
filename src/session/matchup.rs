//! Playing whole games between two players.

use tracing::{debug, info, warn};

use crate::core::{is_loss_score, is_win_score, GameState, PlayerId, PlayerMap};

use super::player::Player;
use super::session::{Move, Session};

/// Outcome of a finished match.
#[derive(Clone, Debug)]
pub struct MatchRecord<S> {
    pub moves: Vec<Move>,
    pub final_state: S,
    pub tallies: PlayerMap<i64>,
}

impl<S: GameState> MatchRecord<S> {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Winner read off the final position's score, if the game was decided.
    ///
    /// `None` for draws and for matches cut short by a side with no move.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let last = self.moves.last()?.player;
        if !self.final_state.is_terminal() {
            return None;
        }
        let score = self.final_state.heuristic();
        if is_win_score(score) {
            Some(last)
        } else if is_loss_score(score) {
            Some(last.opponent())
        } else {
            None
        }
    }
}

/// Play `state` to the end, `first` moving first.
///
/// Stops at a terminal state, or when the side to move has nothing to play.
pub fn play_match<S, A, B>(state: S, first: &mut A, second: &mut B) -> MatchRecord<S>
where
    S: GameState,
    A: Player<S> + ?Sized,
    B: Player<S> + ?Sized,
{
    Session::new(state).play_out(first, second)
}

impl<S: GameState> Session<S> {
    /// Alternate `first` and `second` until the game ends.
    ///
    /// `first` plays for `PlayerId::FIRST` regardless of who is to move now.
    pub fn play_out<A, B>(mut self, first: &mut A, second: &mut B) -> MatchRecord<S>
    where
        A: Player<S> + ?Sized,
        B: Player<S> + ?Sized,
    {
        while !self.is_over() {
            let mover = self.to_move();
            let result = if mover == PlayerId::FIRST {
                self.play_player(first)
            } else {
                self.play_player(second)
            };
            if let Err(err) = result {
                warn!(player = %mover, %err, "match stopped");
                break;
            }
        }

        let (final_state, moves, tallies) = self.into_parts();
        let record = MatchRecord {
            moves,
            final_state,
            tallies,
        };
        info!(plies = record.plies(), winner = ?record.winner(), "match finished");
        debug!(tallies = ?record.tallies, "final tallies");
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OperatorId;
    use crate::games::{TicTacToe, TwentyOne};
    use crate::session::{EnginePlayer, RandomPlayer};

    /// Plays a fixed list of operators, then gives up.
    struct Scripted(Vec<u16>);

    impl<S: GameState> Player<S> for Scripted {
        fn choose(&mut self, _state: &S) -> Option<OperatorId> {
            if self.0.is_empty() {
                None
            } else {
                Some(OperatorId::new(self.0.remove(0)))
            }
        }
    }

    #[test]
    fn test_scripted_match_records_moves() {
        let mut x = Scripted(vec![0, 1, 2]);
        let mut o = Scripted(vec![3, 4]);

        let record = play_match(TicTacToe::new(), &mut x, &mut o);

        assert_eq!(record.plies(), 5);
        assert_eq!(record.winner(), Some(PlayerId::FIRST));
        let players: Vec<_> = record.moves.iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![
                PlayerId::FIRST,
                PlayerId::SECOND,
                PlayerId::FIRST,
                PlayerId::SECOND,
                PlayerId::FIRST
            ]
        );
    }

    #[test]
    fn test_match_stops_when_player_gives_up() {
        let mut x = Scripted(vec![4]);
        let mut o = Scripted(vec![]);

        let record = play_match(TicTacToe::new(), &mut x, &mut o);

        assert_eq!(record.plies(), 1);
        assert!(!record.final_state.is_terminal());
        assert_eq!(record.winner(), None);
    }

    #[test]
    fn test_match_stops_on_illegal_choice() {
        let mut x = Scripted(vec![4]);
        let mut o = Scripted(vec![4]);

        let record = play_match(TicTacToe::new(), &mut x, &mut o);
        assert_eq!(record.plies(), 1);
    }

    #[test]
    fn test_engine_wins_twenty_one_as_first_player() {
        let mut engine = EnginePlayer::new(8);
        let mut random = RandomPlayer::new(11);

        let record = play_match(TwentyOne::new(), &mut engine, &mut random);

        assert!(record.final_state.is_terminal());
        assert_eq!(record.winner(), Some(PlayerId::FIRST));
    }
}
