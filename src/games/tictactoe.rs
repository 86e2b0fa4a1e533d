//! Tic-tac-toe on a 3×3 board.
//!
//! Operators 0..=8 place the next mark on a cell in row-major order. X moves
//! first; whose mark is placed follows from the piece counts.

use crate::core::{GameState, OperatorId, WIN_SCORE};

const N: usize = 3;

const LINES: [[usize; N]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn other(self) -> Self {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// Tic-tac-toe state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    board: [Cell; N * N],
    x_count: u8,
    o_count: u8,
    won: bool,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: [Cell::Empty; N * N],
            x_count: 0,
            o_count: 0,
            won: false,
        }
    }

    /// Operator that marks the cell at (`row`, `col`).
    #[must_use]
    pub fn cell_operator(row: usize, col: usize) -> Option<OperatorId> {
        (row < N && col < N).then(|| OperatorId::new((row * N + col) as u16))
    }

    /// Contents of the cell at (`row`, `col`), if it is on the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < N && col < N).then(|| self.board[row * N + col])
    }

    /// Mark placed by the next move.
    #[must_use]
    pub fn to_move(&self) -> Cell {
        if self.x_count > self.o_count {
            Cell::O
        } else {
            Cell::X
        }
    }

    /// Mark that completed a line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Cell> {
        self.won.then(|| self.to_move().other())
    }

    fn empty_count(&self) -> usize {
        N * N - (self.x_count + self.o_count) as usize
    }

    fn completes_line(&self, cell: usize, mark: Cell) -> bool {
        LINES
            .iter()
            .filter(|line| line.contains(&cell))
            .any(|line| line.iter().all(|&c| self.board[c] == mark))
    }

    /// Marks of `mark` in lines that contain none of the other mark.
    fn open_line_marks(&self, mark: Cell) -> i32 {
        LINES
            .iter()
            .map(|line| {
                let own = line.iter().filter(|&&c| self.board[c] == mark).count();
                let blocked = line.iter().any(|&c| self.board[c] == mark.other());
                if blocked {
                    0
                } else {
                    own as i32
                }
            })
            .sum()
    }

    fn place(&mut self, cell: usize) -> bool {
        if cell >= N * N || self.won || self.board[cell] != Cell::Empty {
            return false;
        }
        let mark = self.to_move();
        self.board[cell] = mark;
        match mark {
            Cell::X => self.x_count += 1,
            _ => self.o_count += 1,
        }
        let was_won = self.won;
        self.won = self.completes_line(cell, mark);
        if self.is_legal() {
            return true;
        }
        self.won = was_won;
        match mark {
            Cell::X => self.x_count -= 1,
            _ => self.o_count -= 1,
        }
        self.board[cell] = Cell::Empty;
        false
    }
}

impl GameState for TicTacToe {
    fn is_legal(&self) -> bool {
        let x = self.board.iter().filter(|&&c| c == Cell::X).count();
        let o = self.board.iter().filter(|&&c| c == Cell::O).count();
        x == self.x_count as usize && o == self.o_count as usize && (x == o || x == o + 1)
    }

    fn is_terminal(&self) -> bool {
        self.won || self.empty_count() == 0
    }

    fn operator_count(&self) -> usize {
        N * N
    }

    fn apply_operator(&mut self, op: OperatorId) -> bool {
        self.place(op.index())
    }

    fn heuristic(&self) -> i32 {
        if self.won {
            return WIN_SCORE;
        }
        if self.empty_count() == N * N {
            return 0;
        }
        self.open_line_marks(self.to_move().other())
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..N {
            let cells: Vec<String> = self.board[row * N..(row + 1) * N]
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect();
            writeln!(f, "{}", cells.join(","))?;
        }
        Ok(())
    }
}
