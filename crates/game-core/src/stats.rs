//! Move history for one room: the current round and all time.
//!
//! Appends are serialized by the owning room's gate, so insertion order is
//! already chronological; nothing here re-sorts.

use std::collections::BTreeMap;

use crate::moves::Move;

/// Dual-scope move log.
///
/// Every move in `round_moves` is also in `all_moves`. Clearing or popping
/// the round log never touches `all_moves`.
#[derive(Debug, Default, Clone)]
pub struct StatsTracker {
    round_moves: Vec<Move>,
    all_moves: Vec<Move>,
}

impl StatsTracker {
    pub fn new() -> Self {
        StatsTracker::default()
    }

    /// Append a move to both logs.
    pub fn add_move(&mut self, mv: Move) {
        self.all_moves.push(mv.clone());
        self.round_moves.push(mv);
    }

    /// Empty the round log only.
    pub fn clear_round_history(&mut self) {
        self.round_moves.clear();
    }

    /// Remove and return the newest move of the current round.
    pub fn pop_round_move(&mut self) -> Option<Move> {
        self.round_moves.pop()
    }

    pub fn round_moves(&self) -> &[Move] {
        &self.round_moves
    }

    pub fn all_moves(&self) -> &[Move] {
        &self.all_moves
    }

    /// Sequence number for the next move added to this tracker.
    ///
    /// `all_moves` is append-only, so its length only grows and the
    /// resulting numbers are unique for the tracker's lifetime.
    pub fn next_sequence(&self) -> u64 {
        self.all_moves.len() as u64 + 1
    }

    /// How many times each position has been played over all rounds.
    pub fn position_usage(&self) -> BTreeMap<usize, usize> {
        let mut usage = BTreeMap::new();
        for mv in &self.all_moves {
            *usage.entry(mv.position).or_insert(0) += 1;
        }
        usage
    }
}
