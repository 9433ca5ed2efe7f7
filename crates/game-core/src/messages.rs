//! Message types exchanged between connections and the gateway.
//!
//! These are **transport-agnostic** logical messages:
//! - [`Request`]: what a connection asks for.
//! - [`ServerMessage`]: what the gateway sends back or broadcasts.
//!
//! Text / JSON encoders live in the `game-protocol` crate; this module is
//! purely logical. Disconnect is not a request: it is the end of a
//! connection's inbound stream.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::snapshot::{GameSnapshot, LobbySummary, RoomStats};

/// A request from one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Create-or-join a room. `board_size` is only used if the room is new;
    /// `None` lets the server pick its default.
    Join {
        room_id: String,
        name: String,
        board_size: Option<usize>,
    },

    /// Play a position for the caller's seat.
    Move { room_id: String, position: usize },

    /// Take back the last move of the round.
    Undo { room_id: String },

    /// Start a new round with a (possibly different) board size.
    NewRound { room_id: String, board_size: usize },

    /// Summaries of every room.
    ListLobby,

    /// All-time statistics of one room.
    Stats { room_id: String },
}

impl Request {
    /// Room addressed by this request, if any.
    pub fn room_id(&self) -> Option<&str> {
        match self {
            Request::Join { room_id, .. }
            | Request::Move { room_id, .. }
            | Request::Undo { room_id }
            | Request::NewRound { room_id, .. }
            | Request::Stats { room_id } => Some(room_id),
            Request::ListLobby => None,
        }
    }
}

/// A message from the gateway to a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// First message on every connection.
    Welcome { connection_id: u64 },

    /// Caller joined a room with this role.
    Joined { room_id: String, role: Role },

    /// Room state after a committed change.
    State(GameSnapshot),

    /// Seat / spectator change in a room.
    Lobby(LobbySummary),

    /// Reply to [`Request::ListLobby`].
    LobbyList { rooms: Vec<LobbySummary> },

    /// Reply to [`Request::Stats`].
    Stats(RoomStats),

    /// Request failed; sent to the caller only.
    Error { message: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}
