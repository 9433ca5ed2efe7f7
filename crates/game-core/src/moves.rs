//! Immutable record of a single played move.
//!
//! Moves carry both a wall-clock timestamp (for display and the exported
//! move log) and a per-room sequence number. Two moves may share a
//! timestamp at coarse clock resolution; the sequence number never repeats
//! within a room, so ordering by it is total.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// A single move on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// 1-based, strictly increasing within one room.
    pub sequence: u64,

    /// 1-indexed board position.
    pub position: usize,

    pub symbol: Symbol,

    pub timestamp: DateTime<Local>,
}

impl Move {
    /// Construct a move with an explicit timestamp.
    pub fn new(sequence: u64, position: usize, symbol: Symbol, timestamp: DateTime<Local>) -> Self {
        Move {
            sequence,
            position,
            symbol,
            timestamp,
        }
    }

    /// Construct a move stamped with the current local time.
    pub fn now(sequence: u64, position: usize, symbol: Symbol) -> Self {
        Self::new(sequence, position, symbol, Local::now())
    }
}
