//! The game state abstraction consumed by the search engine.
//!
//! Games implement [`GameState`] to define:
//! - Which configurations are legal
//! - When the game is over
//! - A fixed set of indexed operators and how they mutate the state
//! - A heuristic score
//!
//! The engine calls into `GameState` but never interprets game-specific data.
//!
//! ## Apply/Rollback Contract
//!
//! `apply_operator` mutates in place. If the result violates `is_legal`, the
//! implementation must apply the exact inverse of the effect and return
//! `false`. A rejected operator leaves the state field-for-field identical to
//! what it was before the call. The engine cannot check this generically;
//! every game backs it with tests.
//!
//! ## Heuristic Perspective
//!
//! `heuristic` scores a position for the side that produced it, i.e. the
//! player who made the last move. The search attaches the sign.

use super::operator::OperatorId;

/// Score reserved for a confirmed win by the side that produced the position.
///
/// Every heuristic of a position that is not a decided game must lie strictly
/// inside `(-WIN_SCORE, WIN_SCORE)`.
pub const WIN_SCORE: i32 = 1000;

/// Check if a score denotes a confirmed win.
#[inline]
#[must_use]
pub const fn is_win_score(score: i32) -> bool {
    score >= WIN_SCORE
}

/// Check if a score denotes a confirmed loss.
#[inline]
#[must_use]
pub const fn is_loss_score(score: i32) -> bool {
    score <= -WIN_SCORE
}

/// State of a two-player, perfect-information, deterministic game.
///
/// `Clone` is the deep copy: mutating a clone never affects the original.
///
/// ## Implementation Notes
///
/// - `operator_count`: Same value for every state of one game
/// - `apply_operator`: Out-of-range or inapplicable operators return `false`
///   without mutating
/// - `is_terminal`: Draws are terminal states too, not a separate outcome
pub trait GameState: Clone {
    /// Check whether the state's invariants hold.
    ///
    /// Used as the post-condition of a trial mutation inside
    /// `apply_operator`, not as a gate for callers.
    fn is_legal(&self) -> bool;

    /// Check if the game has concluded.
    fn is_terminal(&self) -> bool;

    /// Number of operators in this game's action space.
    fn operator_count(&self) -> usize;

    /// Attempt to apply an operator in place.
    ///
    /// Returns `true` if the operator was applied. On `false` the state is
    /// unchanged.
    fn apply_operator(&mut self, op: OperatorId) -> bool;

    /// Score the position for the side that produced it.
    fn heuristic(&self) -> i32;

    // === Convenience Methods ===

    /// Enumerate the operators applicable in this state, in ascending order.
    ///
    /// Default implementation tries every operator on a clone.
    fn legal_operators(&self) -> Vec<OperatorId> {
        OperatorId::all(self.operator_count())
            .filter(|&op| self.clone().apply_operator(op))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter that only accepts even values.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct EvenCounter(i32);

    impl GameState for EvenCounter {
        fn is_legal(&self) -> bool {
            self.0 % 2 == 0
        }

        fn is_terminal(&self) -> bool {
            self.0 >= 10
        }

        fn operator_count(&self) -> usize {
            3
        }

        fn apply_operator(&mut self, op: OperatorId) -> bool {
            if op.index() >= self.operator_count() {
                return false;
            }
            let step = op.index() as i32 + 1;
            self.0 += step;
            if self.is_legal() {
                return true;
            }
            self.0 -= step;
            false
        }

        fn heuristic(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_win_score_helpers() {
        assert!(is_win_score(WIN_SCORE));
        assert!(!is_win_score(WIN_SCORE - 1));
        assert!(is_loss_score(-WIN_SCORE));
        assert!(!is_loss_score(0));
    }

    #[test]
    fn test_legal_operators_does_not_mutate() {
        let state = EvenCounter(4);
        let ops = state.legal_operators();

        assert_eq!(ops, vec![OperatorId::new(1)]);
        assert_eq!(state, EvenCounter(4));
    }

    #[test]
    fn test_rejected_operator_rolls_back() {
        let mut state = EvenCounter(2);
        assert!(!state.apply_operator(OperatorId::new(0)));
        assert_eq!(state, EvenCounter(2));
        assert!(!state.apply_operator(OperatorId::new(3)));
        assert_eq!(state, EvenCounter(2));
        assert!(state.apply_operator(OperatorId::new(1)));
        assert_eq!(state, EvenCounter(4));
    }
}
