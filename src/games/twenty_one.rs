//! "Twenty-one" counting game.
//!
//! Two players take turns adding 1, 2 or 3 to a shared running total that
//! starts at 0. Whoever says exactly 21 wins; overshooting is not allowed.
//!
//! The first player wins by saying 1, 5, 9, 13, 17 and 21. The heuristic
//! rewards totals on that sequence.

use crate::core::{GameState, OperatorId, WIN_SCORE};
use crate::error::{Error, Result};

/// Score of a total on the winning sequence.
const KEY_TOTAL_SCORE: i32 = 100;

/// Score of any other total.
const OTHER_TOTAL_SCORE: i32 = 1;

/// Counting game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwentyOne {
    total: u32,
    target: u32,
    max_step: u32,
}

impl Default for TwentyOne {
    fn default() -> Self {
        Self::new()
    }
}

impl TwentyOne {
    /// Standard game: reach 21 adding 1 to 3 at a time.
    pub fn new() -> Self {
        Self {
            total: 0,
            target: 21,
            max_step: 3,
        }
    }

    /// Game with a custom target and largest step.
    pub fn with_rules(target: u32, max_step: u32) -> Result<Self> {
        if target == 0 {
            return Err(Error::InvalidConfig {
                message: "target must be positive".to_string(),
            });
        }
        if max_step == 0 || max_step > u16::MAX as u32 {
            return Err(Error::InvalidConfig {
                message: format!("max_step must be in 1..={}, got {}", u16::MAX, max_step),
            });
        }
        Ok(Self {
            total: 0,
            target,
            max_step,
        })
    }

    /// Current running total.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Total that wins the game.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Operator that adds `amount`, if `amount` is a valid step.
    #[must_use]
    pub fn step_operator(&self, amount: u32) -> Option<OperatorId> {
        (1..=self.max_step)
            .contains(&amount)
            .then(|| OperatorId::new((amount - 1) as u16))
    }

    /// Totals from which the side that said them forces a win.
    fn is_key_total(&self, total: u32) -> bool {
        total % (self.max_step + 1) == self.target % (self.max_step + 1)
    }
}

impl GameState for TwentyOne {
    fn is_legal(&self) -> bool {
        self.total <= self.target
    }

    fn is_terminal(&self) -> bool {
        self.total == self.target
    }

    fn operator_count(&self) -> usize {
        self.max_step as usize
    }

    fn apply_operator(&mut self, op: OperatorId) -> bool {
        if op.index() >= self.operator_count() {
            return false;
        }
        let amount = op.0 as u32 + 1;
        let Some(total) = self.total.checked_add(amount) else {
            return false;
        };
        self.total = total;
        if self.is_legal() {
            return true;
        }
        self.total -= amount;
        false
    }

    fn heuristic(&self) -> i32 {
        if self.is_terminal() {
            WIN_SCORE
        } else if self.is_key_total(self.total) {
            KEY_TOTAL_SCORE
        } else {
            OTHER_TOTAL_SCORE
        }
    }
}

impl std::fmt::Display for TwentyOne {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.total)
    }
}
