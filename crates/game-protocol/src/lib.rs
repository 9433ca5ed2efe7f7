//! game-protocol
//!
//! Wire-level encoding/decoding for the game server.
//!
//! This crate turns logical messages (`game_core::Request` /
//! `ServerMessage`) into text and back again.
//!
//! - [`text_codec`] : comma-separated request lines (client → server)
//! - [`json_codec`] : JSON lines (server → client)
//! - [`move_log`]   : plain-text move log export

pub mod wire_types;
pub mod error;
pub mod text_codec;
pub mod json_codec;
pub mod move_log;

pub use error::ProtocolError;
pub use text_codec::{format_request, parse_request_line};
pub use json_codec::{decode_server_message, encode_server_message};
pub use move_log::{format_move_line, format_move_log, move_log_file_name};
