//! Ring of numbered tokens.
//!
//! Twelve tokens lie on a ring. Players alternately take one token and add
//! its value to their own tally. The first token may be any; after that only
//! a token next to an already emptied slot may be taken. When the ring is
//! empty the higher tally wins.

use crate::core::{GameState, OperatorId, PlayerId, PlayerMap, WIN_SCORE};

const TOKENS: [u32; 12] = [1, 5, 6, 4, 8, 6, 4, 3, 1, 2, 2, 8];
const ALL_TAKEN: u16 = (1 << TOKENS.len()) - 1;

/// Token ring state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RingSum {
    /// Bit `i` is set once token `i` has been taken.
    taken: u16,
    tallies: PlayerMap<u32>,
    to_move: PlayerId,
}

impl Default for RingSum {
    fn default() -> Self {
        Self::new()
    }
}

impl RingSum {
    /// Full ring, first player to move.
    pub fn new() -> Self {
        Self {
            taken: 0,
            tallies: PlayerMap::with_value(0),
            to_move: PlayerId::FIRST,
        }
    }

    /// Value of the token an operator takes, if it is still on the ring.
    #[must_use]
    pub fn token_value(&self, op: OperatorId) -> Option<u32> {
        let i = op.index();
        (i < TOKENS.len() && !self.is_taken(i)).then(|| TOKENS[i])
    }

    /// Tally of a player.
    #[must_use]
    pub fn tally(&self, player: PlayerId) -> u32 {
        self.tallies[player]
    }

    /// Player who takes the next token.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Number of tokens still on the ring.
    #[must_use]
    pub fn remaining(&self) -> usize {
        TOKENS.len() - self.taken.count_ones() as usize
    }

    fn is_taken(&self, i: usize) -> bool {
        self.taken & (1 << i) != 0
    }

    fn can_take(&self, i: usize) -> bool {
        if i >= TOKENS.len() || self.is_taken(i) {
            return false;
        }
        if self.taken == 0 {
            return true;
        }
        let n = TOKENS.len();
        self.is_taken((i + n - 1) % n) || self.is_taken((i + 1) % n)
    }
}

impl GameState for RingSum {
    fn is_legal(&self) -> bool {
        let taken_sum: u32 = (0..TOKENS.len())
            .filter(|&i| self.is_taken(i))
            .map(|i| TOKENS[i])
            .sum();
        self.taken & !ALL_TAKEN == 0
            && self.tallies[PlayerId::FIRST] + self.tallies[PlayerId::SECOND] == taken_sum
    }

    fn is_terminal(&self) -> bool {
        self.taken == ALL_TAKEN
    }

    fn operator_count(&self) -> usize {
        TOKENS.len()
    }

    fn apply_operator(&mut self, op: OperatorId) -> bool {
        let i = op.index();
        if !self.can_take(i) {
            return false;
        }
        let mover = self.to_move;
        self.taken |= 1 << i;
        self.tallies[mover] += TOKENS[i];
        self.to_move = mover.opponent();
        if self.is_legal() {
            return true;
        }
        self.to_move = mover;
        self.tallies[mover] -= TOKENS[i];
        self.taken &= !(1 << i);
        false
    }

    fn heuristic(&self) -> i32 {
        let mover = self.to_move.opponent();
        let lead = self.tallies[mover] as i32 - self.tallies[self.to_move] as i32;
        if self.is_terminal() {
            lead.signum() * WIN_SCORE
        } else {
            lead
        }
    }
}

impl std::fmt::Display for RingSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots: Vec<String> = (0..TOKENS.len())
            .map(|i| {
                if self.is_taken(i) {
                    "0".to_string()
                } else {
                    TOKENS[i].to_string()
                }
            })
            .collect();
        write!(f, "{}", slots.join(" "))
    }
}
