use game_core::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use thiserror::Error;

/// Errors decoding or validating wire data.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown request tag {0:?}")]
    UnknownTag(String),

    #[error("request {tag} expects {expected} fields, got {got}")]
    FieldCount {
        tag: char,
        expected: &'static str,
        got: usize,
    },

    #[error("invalid number {0:?}")]
    BadNumber(String),

    #[error("invalid room id {0:?}")]
    InvalidRoomId(String),

    #[error("invalid name {0:?}")]
    InvalidName(String),

    #[error("board size must be between {min} and {max}, got {0}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("positions start at 1")]
    InvalidPosition,

    #[error("malformed server message: {0}")]
    Json(#[from] serde_json::Error),
}
