//! Symbol (X / O) marking a player's cells on the board.

use serde::{Deserialize, Serialize};

/// The two marks a player can own.
///
/// Seat order is fixed: `X` always sits in the first seat and moves first
/// in a fresh round, `O` in the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Convert to the single-character representation used on the board
    /// string and in move logs.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }

    /// Try to parse from a char (`'X'` / `'O'`, case-sensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Symbol::X),
            'O' => Some(Symbol::O),
            _ => None,
        }
    }

    /// The other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Seat index of the player owning this symbol (`X` = 0, `O` = 1).
    pub(crate) fn seat(self) -> usize {
        match self {
            Symbol::X => 0,
            Symbol::O => 1,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
