//! Apply/rollback properties of the reference games.
//!
//! A rejected operator must leave the state exactly as it was; an accepted
//! one must leave it legal.

use proptest::prelude::*;

use rust_gametree::core::{GameState, OperatorId};
use rust_gametree::games::{FoxAndHounds, RingSum, TicTacToe, TwentyOne};

/// Apply `ops` in order, checking the contract after every call.
fn check_rollback<S>(mut state: S, ops: &[u16]) -> Result<(), TestCaseError>
where
    S: GameState + PartialEq + std::fmt::Debug,
{
    for &op in ops {
        let before = state.clone();
        if state.apply_operator(OperatorId::new(op)) {
            prop_assert!(state.is_legal(), "illegal state after {}: {:?}", op, state);
            prop_assert_ne!(&state, &before);
        } else {
            prop_assert_eq!(&state, &before);
        }
    }
    Ok(())
}

/// Operator sequences that also reach past the operator range.
fn ops(count: u16) -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0..count + 2, 0..40)
}

proptest! {
    #[test]
    fn test_tictactoe_rollback(seq in ops(9)) {
        check_rollback(TicTacToe::new(), &seq)?;
    }

    #[test]
    fn test_twenty_one_rollback(seq in ops(3)) {
        check_rollback(TwentyOne::new(), &seq)?;
    }

    #[test]
    fn test_custom_twenty_one_rollback(seq in ops(5), target in 1u32..30) {
        check_rollback(TwentyOne::with_rules(target, 5).unwrap(), &seq)?;
    }

    #[test]
    fn test_fox_and_hounds_rollback(seq in ops(12)) {
        check_rollback(FoxAndHounds::new(), &seq)?;
    }

    #[test]
    fn test_ring_sum_rollback(seq in ops(12)) {
        check_rollback(RingSum::new(), &seq)?;
    }

    #[test]
    fn test_legal_operators_are_accepted(seq in ops(12)) {
        let mut state = RingSum::new();
        for op in seq {
            let legal = state.legal_operators();
            let accepted = state.apply_operator(OperatorId::new(op));
            prop_assert_eq!(accepted, legal.contains(&OperatorId::new(op)));
        }
    }
}
