//! Error types for the game core.
//!
//! Every variant is locally recoverable: the failing call leaves board,
//! history and role assignments exactly as they were. The gateway turns
//! these into user-facing messages through their `Display` text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board size below the 3×3 minimum (or above the caller's bound).
    #[error("invalid board size {0}")]
    InvalidSize(usize),

    /// Board or players were not set before play.
    #[error("game is not configured")]
    InvalidConfiguration,

    /// Position out of range, cell occupied, or round already over.
    #[error("invalid move at position {0}")]
    IllegalMove(usize),

    #[error("not your turn")]
    NotYourTurn,

    #[error("room {0} not found")]
    RoomNotFound(String),

    /// Room id unusable as a room key (empty, too long, or outside `[A-Za-z0-9_-]`).
    #[error("invalid room id {0:?}")]
    InvalidRoomId(String),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("spectators cannot play")]
    SpectatorForbidden,
}
