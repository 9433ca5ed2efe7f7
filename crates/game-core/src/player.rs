//! Players seated in a round.

use crate::symbol::Symbol;

/// A seated player: display name, fixed symbol, and win counter.
///
/// The symbol never changes for the lifetime of a `Player`. The win
/// counter lives here, owned by the round (and therefore by the room),
/// not in any process-wide table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: Symbol,
    wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Player {
            name: name.into(),
            symbol,
            wins: 0,
        }
    }

    /// Placeholder player used when a room is created before anyone sits.
    pub fn placeholder(symbol: Symbol) -> Self {
        Player::new(format!("Player {}", symbol.as_char()), symbol)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub(crate) fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
