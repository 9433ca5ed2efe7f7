//! Request tags and field limits shared by encoder and decoder.

use game_core::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Request tags (first field of every request line).
pub const TAG_JOIN: char = 'J';
pub const TAG_MOVE: char = 'M';
pub const TAG_UNDO: char = 'U';
pub const TAG_NEW_ROUND: char = 'R';
pub const TAG_LIST_LOBBY: char = 'L';
pub const TAG_STATS: char = 'S';

/// Field separator of request lines.
pub const FIELD_SEPARATOR: char = ',';

/// Maximum room id length. Room ids also name exported log files, so they
/// are restricted to `[A-Za-z0-9_-]`.
pub const MAX_ROOM_ID_LEN: usize = 32;

/// Maximum display name length.
pub const MAX_NAME_LEN: usize = 32;

pub fn validate_room_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ROOM_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && !name.contains(FIELD_SEPARATOR)
        && !name.chars().any(char::is_control)
}

pub fn validate_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}
