//! Connection identity and the role a connection holds inside a room.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Identifier for a connected client.
///
/// This is intentionally opaque; the gateway guarantees uniqueness over
/// the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(pub u64);

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a connection may do in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Seated player owning a symbol. At most one connection per symbol.
    Player(Symbol),
    /// Watches only. Any number per room.
    Spectator,
}

impl Role {
    /// The symbol this role may play, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Role::Player(symbol) => Some(symbol),
            Role::Spectator => None,
        }
    }

    pub fn is_spectator(self) -> bool {
        matches!(self, Role::Spectator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Player(symbol) => write!(f, "{}", symbol),
            Role::Spectator => f.write_str("spectator"),
        }
    }
}
