//! Move-log export for finished rounds.
//!
//! The gateway hands a finished round's moves to a [`MoveLogSink`]. The
//! file implementation writes one `<room>_moves_<YYYYMMDD_HHMMSS>.txt` per
//! finished round under a fixed directory. Room ids that could leave that
//! directory are refused.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Local;
use game_core::Move;
use game_protocol::{format_move_log, move_log_file_name};

/// Destination for the moves of a finished round.
#[async_trait]
pub trait MoveLogSink: Send + Sync {
    /// Persist `moves` for `room_id`; returns where they went.
    async fn write_round(&self, room_id: &str, moves: &[Move]) -> Result<PathBuf>;
}

/// Writes move logs as text files in `dir`, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileMoveLog {
    dir: PathBuf,
}

impl FileMoveLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileMoveLog { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MoveLogSink for FileMoveLog {
    async fn write_round(&self, room_id: &str, moves: &[Move]) -> Result<PathBuf> {
        if room_id.is_empty() || room_id.contains(['/', '\\']) || room_id.contains("..") {
            bail!("room id {:?} cannot name a move log file", room_id);
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating export dir {}", self.dir.display()))?;

        let path = self.dir.join(move_log_file_name(room_id, Local::now()));
        tokio::fs::write(&path, format_move_log(moves))
            .await
            .with_context(|| format!("writing move log {}", path.display()))?;

        Ok(path)
    }
}
