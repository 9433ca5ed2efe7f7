//! Read-only projections of a room for observers.
//!
//! None of these types are ever mutated in place; they are recomputed from
//! the room state on demand, inside a gate hold, and handed to the gateway
//! for transmission.

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::round::RoundStatus;
use crate::symbol::Symbol;

/// Point-in-time view of a room's current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room_id: String,
    pub board_size: usize,

    /// Row-major cells, `.` for empty.
    pub board: String,

    pub status: RoundStatus,
    pub player_x: String,
    pub player_o: String,

    /// Symbol of the player to move (or the winner once the round is won).
    pub current_symbol: Option<Symbol>,

    /// Set only when `status == Win`.
    pub winner: Option<String>,

    /// Moves of the current round, oldest first.
    pub moves: Vec<Move>,
}

/// One lobby row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySummary {
    pub room_id: String,
    pub player_x: String,
    pub player_x_wins: u32,
    pub player_o: String,
    pub player_o_wins: u32,
    pub status: RoundStatus,
    pub current_player: Option<String>,

    /// Whether a connection currently holds each seat.
    pub x_seated: bool,
    pub o_seated: bool,
    pub spectators: usize,
}

/// Long-lived statistics of a room, across all rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    pub room_id: String,
    pub total_moves: usize,
    pub round_moves: usize,
    pub player_x_wins: u32,
    pub player_o_wins: u32,

    /// How often each position was played, all rounds, by position.
    pub position_usage: Vec<PositionCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCount {
    pub position: usize,
    pub count: usize,
}
