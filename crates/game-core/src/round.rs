//! Turn-based rule engine for one round of play.
//!
//! State machine:
//!
//! ```text
//! NotStarted --set_board_size--> InProgress --move--> Win | Draw
//!                                    ^                   |
//!                                    +------- undo ------+
//! ```
//!
//! Players and board are configured independently; both must be present
//! before a move is accepted. `set_board_size` is both "start a new round"
//! and the only way to change the board dimensions.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::Board;
use crate::error::GameError;
use crate::moves::Move;
use crate::player::Player;
use crate::stats::StatsTracker;
use crate::symbol::Symbol;

/// Lifecycle of a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No board yet.
    #[default]
    NotStarted,
    InProgress,
    Win,
    Draw,
}

impl RoundStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, RoundStatus::Win | RoundStatus::Draw)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoundStatus::NotStarted => "NotStarted",
            RoundStatus::InProgress => "InProgress",
            RoundStatus::Win => "Win",
            RoundStatus::Draw => "Draw",
        };
        f.write_str(s)
    }
}

/// Result of an accepted move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Round continues; the turn passed to the opponent.
    Continue,
    /// The mover completed a line and stays current.
    Win,
    /// Board is full with no line.
    Draw,
}

/// One round: board, two seated players, whose turn it is, and the move
/// history of the owning room.
#[derive(Debug, Default)]
pub struct Round {
    board: Option<Board>,

    /// Seat 0 plays X, seat 1 plays O.
    players: Option<[Player; 2]>,

    /// Seat index of the player to move. Turn ownership is by seat, never
    /// by comparing names.
    current: usize,

    status: RoundStatus,

    history: StatsTracker,
}

impl Round {
    pub fn new() -> Self {
        Round::default()
    }

    /// Seat both players; `p1` moves first.
    pub fn set_players(&mut self, p1: Player, p2: Player) {
        self.players = Some([p1, p2]);
        self.current = 0;
    }

    /// Create a fresh board and put the round in progress.
    ///
    /// History is left alone; starting a new round from a room clears the
    /// round log separately.
    pub fn set_board_size(&mut self, size: usize) -> Result<(), GameError> {
        let board = Board::new(size)?;
        self.board = Some(board);
        self.status = RoundStatus::InProgress;
        Ok(())
    }

    /// Bind a display name to the seat holding `symbol`, keeping that seat's
    /// wins and the current turn.
    pub fn rename_player(&mut self, symbol: Symbol, name: impl Into<String>) {
        if let Some(players) = self.players.as_mut() {
            players[symbol.seat()].set_name(name);
        }
    }

    /// Seat a new player in `player`'s symbol seat, replacing whoever held
    /// it. The current turn is unchanged.
    pub fn seat_player(&mut self, player: Player) {
        if let Some(players) = self.players.as_mut() {
            let seat = player.symbol().seat();
            players[seat] = player;
        }
    }

    /// Play `position` for the current player.
    pub fn try_play_move(&mut self, position: usize) -> Result<MoveOutcome, GameError> {
        let (board, players) = match (self.board.as_mut(), self.players.as_mut()) {
            (Some(board), Some(players)) => (board, players),
            _ => return Err(GameError::InvalidConfiguration),
        };

        let mover = &mut players[self.current];

        if self.status != RoundStatus::InProgress || !board.is_move_valid(position) {
            warn!(
                player = mover.name(),
                position,
                status = %self.status,
                "invalid move"
            );
            return Err(GameError::IllegalMove(position));
        }

        let symbol = mover.symbol();
        board.place_move(position, symbol)?;

        let mv = Move::now(self.history.next_sequence(), position, symbol);
        debug!(seq = mv.sequence, position, %symbol, "move played");
        self.history.add_move(mv);

        if board.check_win(symbol) {
            self.status = RoundStatus::Win;
            mover.add_win();
            return Ok(MoveOutcome::Win);
        }

        if board.is_draw() {
            self.status = RoundStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.switch_player();
        Ok(MoveOutcome::Continue)
    }

    /// Take back the newest move of the round.
    ///
    /// The mover of the undone move becomes current again and the round is
    /// back in progress, even if that move had ended it. Win counters are
    /// not touched.
    pub fn try_undo_last_move(&mut self) -> Result<Move, GameError> {
        let board = self.board.as_mut().ok_or(GameError::InvalidConfiguration)?;
        let mv = self.history.pop_round_move().ok_or(GameError::NothingToUndo)?;

        if let Some((row, col)) = board.coordinates(mv.position) {
            board.clear_cell(row, col);
        }

        self.current = mv.symbol.seat();
        self.status = RoundStatus::InProgress;
        debug!(seq = mv.sequence, position = mv.position, symbol = %mv.symbol, "move undone");

        Ok(mv)
    }

    /// `true` iff the round is in progress and `symbol` is the one to move.
    pub fn is_players_turn(&self, symbol: Symbol) -> bool {
        self.status == RoundStatus::InProgress
            && self
                .current_player()
                .map_or(false, |player| player.symbol() == symbol)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    pub fn player(&self, symbol: Symbol) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[symbol.seat()])
    }

    /// The winning player, if the round ended in a win.
    pub fn winner(&self) -> Option<&Player> {
        if self.status == RoundStatus::Win {
            self.current_player()
        } else {
            None
        }
    }

    pub fn history(&self) -> &StatsTracker {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut StatsTracker {
        &mut self.history
    }

    fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }
}
