//! game-core
//!
//! Pure room coordination and game-state logic:
//! - board and 3-in-a-row rules
//! - per-round rule engine (turns, win/draw, undo)
//! - move history / statistics
//! - rooms with a per-room gate, and the lazily-populated room registry
//! - transport-agnostic request / server messages

pub mod symbol;
pub mod board;
pub mod player;
pub mod moves;
pub mod stats;
pub mod round;
pub mod role;
pub mod snapshot;
pub mod messages;
pub mod room;
pub mod registry;
pub mod error;

pub use symbol::Symbol;
pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, WIN_LENGTH};
pub use player::Player;
pub use moves::Move;
pub use stats::StatsTracker;
pub use round::{MoveOutcome, Round, RoundStatus};
pub use role::{ConnectionId, Role};
pub use snapshot::{GameSnapshot, LobbySummary, PositionCount, RoomStats};
pub use messages::{Request, ServerMessage};
pub use room::{Broadcast, JoinOutcome, MoveApplied, Room, RoomState, UndoOutcome};
pub use registry::RoomRegistry;
pub use error::GameError;
