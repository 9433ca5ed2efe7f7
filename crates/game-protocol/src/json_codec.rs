//! Server → client messages as newline-delimited JSON.
//!
//! Each [`ServerMessage`] is one JSON object tagged by `"type"`
//! (`welcome`, `joined`, `state`, `lobby`, `lobby_list`, `stats`, `error`),
//! written on its own line.

use game_core::ServerMessage;

use crate::error::ProtocolError;

/// Encode a message as a single JSON line (without trailing newline).
pub fn encode_server_message(msg: &ServerMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(msg)?)
}

/// Decode one line produced by [`encode_server_message`].
pub fn decode_server_message(line: &str) -> Result<ServerMessage, ProtocolError> {
    Ok(serde_json::from_str(line.trim())?)
}
