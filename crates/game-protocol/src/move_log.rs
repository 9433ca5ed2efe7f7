//! Plain-text export of a round's moves.
//!
//! One line per move, oldest first:
//!
//! ```text
//! 2026-10-16 14:03:07.412 - X played 5
//! 2026-10-16 14:03:09.088 - O played 1
//! ```
//!
//! Moves are ordered by sequence number, not timestamp, so two moves
//! stamped in the same clock tick still come out in play order.

use chrono::{DateTime, Local};
use game_core::Move;

const LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format one move as `<time> - <symbol> played <position>`.
pub fn format_move_line(mv: &Move) -> String {
    format!(
        "{} - {} played {}",
        mv.timestamp.format(LINE_TIME_FORMAT),
        mv.symbol,
        mv.position
    )
}

/// Format a whole move log, newline-terminated.
pub fn format_move_log(moves: &[Move]) -> String {
    let mut ordered: Vec<&Move> = moves.iter().collect();
    ordered.sort_by_key(|mv| mv.sequence);

    let mut out = String::new();
    for mv in ordered {
        out.push_str(&format_move_line(mv));
        out.push('\n');
    }
    out
}

/// File name for a log exported at `exported_at`: `<room>_moves_<YYYYMMDD_HHMMSS>.txt`.
pub fn move_log_file_name(room_id: &str, exported_at: DateTime<Local>) -> String {
    format!("{}_moves_{}.txt", room_id, exported_at.format(FILE_TIME_FORMAT))
}
