//! Fox and hounds on an 8×8 board.
//!
//! Four hounds start on the bottom row and may only step diagonally upward.
//! The fox starts on the top row and steps diagonally in any direction. The
//! fox moves first and the sides alternate.
//!
//! The fox wins once it is below every hound (hounds can never come back
//! down). The hounds win when the fox cannot move. A hound side without moves
//! loses as well.
//!
//! ## Operators
//!
//! - `2k`, `2k + 1` (k in 0..4): hound k steps up-right, up-left
//! - `8..=11`: fox steps down-left, down-right, up-right, up-left

use crate::core::{GameState, OperatorId, WIN_SCORE};
use crate::error::{Error, Result};

const BOARD: i8 = 8;
const HOUNDS: usize = 4;
const HOUND_OPERATORS: usize = 2 * HOUNDS;
const FOX_STEPS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
const HOUND_STEPS: [(i8, i8); 2] = [(1, -1), (-1, -1)];

/// Score per fox step taken away (hounds) or kept open (fox).
const MOBILITY_WEIGHT: i32 = 10;

/// A board square; `y` grows downward from the fox's starting row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    /// Create a new square.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    fn on_board(self) -> bool {
        (0..BOARD).contains(&self.x) && (0..BOARD).contains(&self.y)
    }

    fn offset(self, (dx, dy): (i8, i8)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Which piece an operator moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    Hound(usize),
    Fox,
}

/// Fox and hounds state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FoxAndHounds {
    fox: Square,
    hounds: [Square; HOUNDS],
    fox_to_move: bool,
}

impl Default for FoxAndHounds {
    fn default() -> Self {
        Self::new()
    }
}

impl FoxAndHounds {
    /// Standard opening position, fox to move.
    pub fn new() -> Self {
        Self {
            fox: Square::new(2, 0),
            hounds: [
                Square::new(1, 7),
                Square::new(3, 7),
                Square::new(5, 7),
                Square::new(7, 7),
            ],
            fox_to_move: true,
        }
    }

    /// Arbitrary position, validated.
    pub fn from_positions(
        fox: Square,
        hounds: [Square; HOUNDS],
        fox_to_move: bool,
    ) -> Result<Self> {
        let state = Self {
            fox,
            hounds,
            fox_to_move,
        };
        if !state.is_legal() {
            return Err(Error::InvalidConfig {
                message: format!("illegal position: fox {fox:?}, hounds {hounds:?}"),
            });
        }
        Ok(state)
    }

    /// Current fox square.
    #[must_use]
    pub fn fox(&self) -> Square {
        self.fox
    }

    /// Current hound squares.
    #[must_use]
    pub fn hounds(&self) -> &[Square; HOUNDS] {
        &self.hounds
    }

    /// Check if the fox moves next.
    #[must_use]
    pub fn fox_to_move(&self) -> bool {
        self.fox_to_move
    }

    /// Check if the fox has passed every hound.
    #[must_use]
    pub fn fox_escaped(&self) -> bool {
        self.hounds.iter().all(|h| h.y < self.fox.y)
    }

    /// Number of squares the fox could step to.
    #[must_use]
    pub fn fox_mobility(&self) -> usize {
        FOX_STEPS
            .iter()
            .filter(|&&step| self.is_free(self.fox.offset(step)))
            .count()
    }

    fn hounds_can_move(&self) -> bool {
        self.hounds
            .iter()
            .any(|&h| HOUND_STEPS.iter().any(|&step| self.is_free(h.offset(step))))
    }

    fn is_free(&self, square: Square) -> bool {
        square.on_board() && square != self.fox && !self.hounds.contains(&square)
    }

    /// Check if the side to move has no step.
    fn side_to_move_stuck(&self) -> bool {
        if self.fox_to_move {
            self.fox_mobility() == 0
        } else {
            !self.hounds_can_move()
        }
    }

    fn decode(op: OperatorId) -> Option<(Piece, (i8, i8))> {
        let i = op.index();
        if i < HOUND_OPERATORS {
            Some((Piece::Hound(i / 2), HOUND_STEPS[i % 2]))
        } else {
            FOX_STEPS
                .get(i - HOUND_OPERATORS)
                .map(|&step| (Piece::Fox, step))
        }
    }

    fn piece_mut(&mut self, piece: Piece) -> &mut Square {
        match piece {
            Piece::Hound(k) => &mut self.hounds[k],
            Piece::Fox => &mut self.fox,
        }
    }
}

impl GameState for FoxAndHounds {
    fn is_legal(&self) -> bool {
        if !self.fox.on_board() || !self.hounds.iter().all(|h| h.on_board()) {
            return false;
        }
        let squares: Vec<Square> = std::iter::once(self.fox).chain(self.hounds).collect();
        squares
            .iter()
            .enumerate()
            .all(|(i, a)| squares[i + 1..].iter().all(|b| a != b))
    }

    fn is_terminal(&self) -> bool {
        self.fox_escaped() || self.side_to_move_stuck()
    }

    fn operator_count(&self) -> usize {
        HOUND_OPERATORS + FOX_STEPS.len()
    }

    fn apply_operator(&mut self, op: OperatorId) -> bool {
        let Some((piece, (dx, dy))) = Self::decode(op) else {
            return false;
        };
        if (piece == Piece::Fox) != self.fox_to_move {
            return false;
        }

        let square = self.piece_mut(piece);
        square.x += dx;
        square.y += dy;
        if self.is_legal() {
            self.fox_to_move = !self.fox_to_move;
            return true;
        }
        let square = self.piece_mut(piece);
        square.x -= dx;
        square.y -= dy;
        false
    }

    fn heuristic(&self) -> i32 {
        let fox_moved = !self.fox_to_move;
        if self.is_terminal() {
            let fox_won = self.fox_escaped() || !self.fox_to_move;
            return if fox_won == fox_moved { WIN_SCORE } else { -WIN_SCORE };
        }

        let mobility = self.fox_mobility() as i32;
        if fox_moved {
            mobility * MOBILITY_WEIGHT + self.fox.y as i32
        } else {
            (FOX_STEPS.len() as i32 - mobility) * MOBILITY_WEIGHT
        }
    }
}

impl std::fmt::Display for FoxAndHounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD {
            let row: String = (0..BOARD)
                .map(|x| {
                    let square = Square::new(x, y);
                    if square == self.fox {
                        'F'
                    } else if self.hounds.contains(&square) {
                        'H'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
