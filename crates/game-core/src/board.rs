//! Square game board with fixed 3-in-a-row win detection.
//!
//! - Positions are 1-indexed and row-major: `row = (pos - 1) / size`,
//!   `col = (pos - 1) % size`.
//! - The win length is [`WIN_LENGTH`] for every board size; a 9×9 board is
//!   won by three in a row, not nine.
//! - `check_win` and `is_draw` are independent predicates. A full board can
//!   also be a won board, so callers check for a win first.

use crate::error::GameError;
use crate::symbol::Symbol;

/// Number of consecutive same-symbol cells needed to win.
pub const WIN_LENGTH: usize = 3;

/// Smallest board the rule engine accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board callers are expected to request.
///
/// `Board::new` itself only enforces the lower bound; the protocol and the
/// gateway reject sizes above this.
pub const MAX_BOARD_SIZE: usize = 9;

/// Character used for an empty cell in [`Board::to_flat_string`].
pub const EMPTY_CELL: char = '.';

/// A square grid of cells, each empty or holding one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,

    /// Row-major cells, `size * size` long. Never resized.
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Create an empty board of `size × size` cells.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize(size));
        }

        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Highest valid position (`size²`).
    pub fn max_position(&self) -> usize {
        self.size * self.size
    }

    /// Map a 1-indexed position to `(row, col)`, or `None` if out of range.
    pub fn coordinates(&self, position: usize) -> Option<(usize, usize)> {
        if position == 0 || position > self.max_position() {
            return None;
        }
        let idx = position - 1;
        Some((idx / self.size, idx % self.size))
    }

    /// Cell contents at `(row, col)`. Out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<Symbol> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// `true` iff `position` is on the board and its cell is empty.
    pub fn is_move_valid(&self, position: usize) -> bool {
        match self.coordinates(position) {
            Some((row, col)) => self.cell(row, col).is_none(),
            None => false,
        }
    }

    /// Mark `position` with `symbol`.
    ///
    /// Callers are expected to check [`Board::is_move_valid`] first; an
    /// invalid position is still refused here and leaves the board untouched.
    pub fn place_move(&mut self, position: usize, symbol: Symbol) -> Result<(), GameError> {
        if !self.is_move_valid(position) {
            return Err(GameError::IllegalMove(position));
        }
        self.cells[position - 1] = Some(symbol);
        Ok(())
    }

    /// Reset a single cell to empty. Only undo uses this.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = None;
        }
    }

    /// `true` if `symbol` holds [`WIN_LENGTH`] consecutive cells in any row,
    /// column or diagonal, starting anywhere on the board.
    pub fn check_win(&self, symbol: Symbol) -> bool {
        let n = self.size;
        let last_start = n - WIN_LENGTH;

        // Horizontal and vertical runs.
        for fixed in 0..n {
            for start in 0..=last_start {
                if self.run_matches(symbol, |k| (fixed, start + k)) {
                    return true;
                }
                if self.run_matches(symbol, |k| (start + k, fixed)) {
                    return true;
                }
            }
        }

        // Both diagonal directions.
        for row in 0..=last_start {
            for col in 0..=last_start {
                if self.run_matches(symbol, |k| (row + k, col + k)) {
                    return true;
                }
                if self.run_matches(symbol, |k| (row + k, col + WIN_LENGTH - 1 - k)) {
                    return true;
                }
            }
        }

        false
    }

    /// `true` iff no empty cell remains.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Row-major flattening, one char per cell, `.` for empty.
    pub fn to_flat_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(EMPTY_CELL, Symbol::as_char))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn run_matches<F>(&self, symbol: Symbol, at: F) -> bool
    where
        F: Fn(usize) -> (usize, usize),
    {
        (0..WIN_LENGTH).all(|k| {
            let (row, col) = at(k);
            self.cell(row, col) == Some(symbol)
        })
    }
}
