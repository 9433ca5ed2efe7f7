// crates/game-protocol/src/text_codec.rs

//! Comma-separated request lines (client → server).
//!
//! Readable with netcat and easy to type. One request per line; fields are
//! trimmed.
//!
//! - Join (board size optional, used only when the room is new; the server
//!   default applies when omitted):
//!   `J, room(string), name(string)[, boardSize(int)]`
//!
//! - Move:
//!   `M, room(string), position(int, 1-based)`
//!
//! - Undo:
//!   `U, room(string)`
//!
//! - New round:
//!   `R, room(string), boardSize(int)`
//!
//! - List lobby:
//!   `L`
//!
//! - Room statistics:
//!   `S, room(string)`
//!
//! Blank lines and lines starting with `#` are ignored.

use game_core::Request;

use crate::error::ProtocolError;
use crate::wire_types::{
    validate_board_size, validate_name, validate_room_id, FIELD_SEPARATOR,
    TAG_JOIN, TAG_LIST_LOBBY, TAG_MOVE, TAG_NEW_ROUND, TAG_STATS, TAG_UNDO,
};

/// Parse a single request line.
///
/// Returns `Ok(None)` for blank lines or comments.
pub fn parse_request_line(line: &str) -> Result<Option<Request>, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = split_and_trim(trimmed, FIELD_SEPARATOR);
    let tag = single_char(&tokens[0]).ok_or_else(|| ProtocolError::UnknownTag(tokens[0].clone()))?;

    let request = match tag {
        TAG_JOIN => parse_join(&tokens)?,
        TAG_MOVE => parse_move(&tokens)?,
        TAG_UNDO => {
            expect_fields(tag, &tokens, 2, "2")?;
            Request::Undo {
                room_id: room_id(&tokens[1])?,
            }
        }
        TAG_NEW_ROUND => {
            expect_fields(tag, &tokens, 3, "3")?;
            Request::NewRound {
                room_id: room_id(&tokens[1])?,
                board_size: board_size(&tokens[2])?,
            }
        }
        TAG_LIST_LOBBY => {
            expect_fields(tag, &tokens, 1, "1")?;
            Request::ListLobby
        }
        TAG_STATS => {
            expect_fields(tag, &tokens, 2, "2")?;
            Request::Stats {
                room_id: room_id(&tokens[1])?,
            }
        }
        _ => return Err(ProtocolError::UnknownTag(tokens[0].clone())),
    };

    Ok(Some(request))
}

fn parse_join(tokens: &[String]) -> Result<Request, ProtocolError> {
    // J, room, name[, size]
    let size = match tokens.len() {
        3 => None,
        4 => Some(board_size(&tokens[3])?),
        got => {
            return Err(ProtocolError::FieldCount {
                tag: TAG_JOIN,
                expected: "3 or 4",
                got,
            })
        }
    };

    let name = tokens[2].clone();
    if !validate_name(&name) {
        return Err(ProtocolError::InvalidName(name));
    }

    Ok(Request::Join {
        room_id: room_id(&tokens[1])?,
        name,
        board_size: size,
    })
}

fn parse_move(tokens: &[String]) -> Result<Request, ProtocolError> {
    // M, room, position
    expect_fields(TAG_MOVE, tokens, 3, "3")?;

    let position = parse_usize(&tokens[2])?;
    if position == 0 {
        return Err(ProtocolError::InvalidPosition);
    }

    Ok(Request::Move {
        room_id: room_id(&tokens[1])?,
        position,
    })
}

/// Format a request as a line (without trailing newline).
///
/// Inverse of [`parse_request_line`] for valid requests.
pub fn format_request(request: &Request) -> String {
    match request {
        Request::Join {
            room_id,
            name,
            board_size: Some(size),
        } => format!("{}, {}, {}, {}", TAG_JOIN, room_id, name, size),
        Request::Join {
            room_id,
            name,
            board_size: None,
        } => format!("{}, {}, {}", TAG_JOIN, room_id, name),
        Request::Move { room_id, position } => format!("{}, {}, {}", TAG_MOVE, room_id, position),
        Request::Undo { room_id } => format!("{}, {}", TAG_UNDO, room_id),
        Request::NewRound {
            room_id,
            board_size,
        } => format!("{}, {}, {}", TAG_NEW_ROUND, room_id, board_size),
        Request::ListLobby => TAG_LIST_LOBBY.to_string(),
        Request::Stats { room_id } => format!("{}, {}", TAG_STATS, room_id),
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn expect_fields(
    tag: char,
    tokens: &[String],
    count: usize,
    expected: &'static str,
) -> Result<(), ProtocolError> {
    if tokens.len() == count {
        Ok(())
    } else {
        Err(ProtocolError::FieldCount {
            tag,
            expected,
            got: tokens.len(),
        })
    }
}

fn room_id(token: &str) -> Result<String, ProtocolError> {
    if validate_room_id(token) {
        Ok(token.to_string())
    } else {
        Err(ProtocolError::InvalidRoomId(token.to_string()))
    }
}

fn board_size(token: &str) -> Result<usize, ProtocolError> {
    let size = parse_usize(token)?;
    if validate_board_size(size) {
        Ok(size)
    } else {
        Err(ProtocolError::InvalidBoardSize(size))
    }
}

fn parse_usize(token: &str) -> Result<usize, ProtocolError> {
    token
        .parse::<usize>()
        .map_err(|_| ProtocolError::BadNumber(token.to_string()))
}
