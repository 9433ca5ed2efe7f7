//! A single game room and its gate.
//!
//! A room owns one [`Round`] (and through it the room's move history) plus
//! the connection → role map. All of it sits behind one async mutex, the
//! room's *gate*: every read-decide-write sequence (play, undo, new round,
//! join, leave) runs inside a single gate hold, and the snapshot handed
//! back for broadcasting is computed before the gate is released, so
//! observers only ever see committed state.
//!
//! Gate holds are bounded by in-memory work (at worst a win scan over
//! the board); nothing here awaits anything but the gate itself.

use std::collections::BTreeMap;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::error::GameError;
use crate::moves::Move;
use crate::player::Player;
use crate::role::{ConnectionId, Role};
use crate::round::{MoveOutcome, Round};
use crate::snapshot::{GameSnapshot, LobbySummary, PositionCount, RoomStats};
use crate::symbol::Symbol;

/// A payload plus the connections it should be delivered to.
///
/// The audience is captured inside the same gate hold as the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast<T> {
    pub payload: T,
    pub audience: Vec<ConnectionId>,
}

/// Result of a join.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub role: Role,
    /// Sent to the joining connection.
    pub snapshot: GameSnapshot,
    /// Sent to everyone in the room.
    pub lobby: Broadcast<LobbySummary>,
}

/// Result of a successful move.
#[derive(Debug, Clone)]
pub struct MoveApplied {
    pub outcome: MoveOutcome,
    pub state: Broadcast<GameSnapshot>,
}

/// Result of an undo request; the state is broadcast whether or not a
/// move was actually taken back.
#[derive(Debug, Clone)]
pub struct UndoOutcome {
    pub undone: Result<Move, GameError>,
    pub state: Broadcast<GameSnapshot>,
}

// -----------------------------------------------------------------------------
// Gate-protected state
// -----------------------------------------------------------------------------

/// Everything a room's gate protects.
#[derive(Debug)]
pub struct RoomState {
    room_id: String,
    round: Round,
    connections: BTreeMap<ConnectionId, Role>,
}

impl RoomState {
    fn new(room_id: String, round: Round) -> Self {
        RoomState {
            room_id,
            round,
            connections: BTreeMap::new(),
        }
    }

    /// Role of `conn`, assigning one if it has none yet.
    ///
    /// First free seat wins: X, then O, then spectator. A seat freed by
    /// [`RoomState::remove_connection`] is free again.
    pub fn assign_role(&mut self, conn: ConnectionId) -> Role {
        if let Some(role) = self.connections.get(&conn) {
            return *role;
        }

        let role = if self.seat_holder(Symbol::X).is_none() {
            Role::Player(Symbol::X)
        } else if self.seat_holder(Symbol::O).is_none() {
            Role::Player(Symbol::O)
        } else {
            Role::Spectator
        };

        self.connections.insert(conn, role);
        role
    }

    /// Drop `conn`'s role. Game state is untouched.
    pub fn remove_connection(&mut self, conn: ConnectionId) -> Option<Role> {
        self.connections.remove(&conn)
    }

    pub fn role_of(&self, conn: ConnectionId) -> Option<Role> {
        self.connections.get(&conn).copied()
    }

    pub fn contains(&self, conn: ConnectionId) -> bool {
        self.connections.contains_key(&conn)
    }

    /// Connection currently holding the seat for `symbol`.
    pub fn seat_holder(&self, symbol: Symbol) -> Option<ConnectionId> {
        self.connections
            .iter()
            .find(|(_, role)| **role == Role::Player(symbol))
            .map(|(conn, _)| *conn)
    }

    /// Every connection in the room, in id order.
    pub fn members(&self) -> Vec<ConnectionId> {
        self.connections.keys().copied().collect()
    }

    pub fn spectator_count(&self) -> usize {
        self.connections.values().filter(|role| role.is_spectator()).count()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// Current round as seen by observers.
    pub fn snapshot(&self) -> GameSnapshot {
        let round = &self.round;
        let (board_size, board) = round
            .board()
            .map(|b| (b.size(), b.to_flat_string()))
            .unwrap_or_default();

        GameSnapshot {
            room_id: self.room_id.clone(),
            board_size,
            board,
            status: round.status(),
            player_x: self.player_name(Symbol::X),
            player_o: self.player_name(Symbol::O),
            current_symbol: round.current_player().map(Player::symbol),
            winner: round.winner().map(|p| p.name().to_string()),
            moves: round.history().round_moves().to_vec(),
        }
    }

    /// Lobby row for this room.
    pub fn summary(&self) -> LobbySummary {
        let round = &self.round;
        LobbySummary {
            room_id: self.room_id.clone(),
            player_x: self.player_name(Symbol::X),
            player_x_wins: self.player_wins(Symbol::X),
            player_o: self.player_name(Symbol::O),
            player_o_wins: self.player_wins(Symbol::O),
            status: round.status(),
            current_player: round.current_player().map(|p| p.name().to_string()),
            x_seated: self.seat_holder(Symbol::X).is_some(),
            o_seated: self.seat_holder(Symbol::O).is_some(),
            spectators: self.spectator_count(),
        }
    }

    /// All-time statistics for this room.
    pub fn stats(&self) -> RoomStats {
        let history = self.round.history();
        RoomStats {
            room_id: self.room_id.clone(),
            total_moves: history.all_moves().len(),
            round_moves: history.round_moves().len(),
            player_x_wins: self.player_wins(Symbol::X),
            player_o_wins: self.player_wins(Symbol::O),
            position_usage: history
                .position_usage()
                .into_iter()
                .map(|(position, count)| PositionCount { position, count })
                .collect(),
        }
    }

    fn player_name(&self, symbol: Symbol) -> String {
        self.round
            .player(symbol)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    fn player_wins(&self, symbol: Symbol) -> u32 {
        self.round.player(symbol).map_or(0, Player::wins)
    }
}

// -----------------------------------------------------------------------------
// Room
// -----------------------------------------------------------------------------

/// An isolated, independently-locked game session.
#[derive(Debug)]
pub struct Room {
    id: String,
    gate: Mutex<RoomState>,
}

impl Room {
    /// Fresh room with placeholder players and a board of `board_size`.
    ///
    /// This is the factory the registry runs (at most once per id).
    pub fn new(id: impl Into<String>, board_size: usize) -> Result<Self, GameError> {
        let id = id.into();

        let mut round = Round::new();
        round.set_players(Player::placeholder(Symbol::X), Player::placeholder(Symbol::O));
        round.set_board_size(board_size)?;

        info!(room = %id, board_size, "room created");
        Ok(Room::from_round(id, round))
    }

    /// Wrap an already-configured round.
    pub fn from_round(id: impl Into<String>, round: Round) -> Self {
        let id = id.into();
        Room {
            gate: Mutex::new(RoomState::new(id.clone(), round)),
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Acquire the gate.
    pub async fn lock(&self) -> MutexGuard<'_, RoomState> {
        self.gate.lock().await
    }

    /// Assign `conn` a role and, for a player seat, bind `name` to it.
    ///
    /// A connection taking a free seat gets a fresh player with no wins; a
    /// connection re-joining its own seat only renames it.
    pub async fn join(&self, conn: ConnectionId, name: &str) -> JoinOutcome {
        let mut state = self.lock().await;

        let rejoining = state.contains(conn);
        let role = state.assign_role(conn);
        if let Role::Player(symbol) = role {
            if rejoining {
                state.round_mut().rename_player(symbol, name);
            } else {
                state.round_mut().seat_player(Player::new(name, symbol));
            }
        }
        info!(room = %self.id, conn = %conn, name, role = %role, "joined");

        JoinOutcome {
            role,
            snapshot: state.snapshot(),
            lobby: Broadcast {
                payload: state.summary(),
                audience: state.members(),
            },
        }
    }

    /// Play `position` on behalf of `conn`.
    pub async fn play_move(&self, conn: ConnectionId, position: usize) -> Result<MoveApplied, GameError> {
        let mut state = self.lock().await;

        let symbol = state
            .role_of(conn)
            .and_then(Role::symbol)
            .ok_or(GameError::SpectatorForbidden)?;

        let round = state.round_mut();
        if round.status().is_finished() {
            return Err(GameError::IllegalMove(position));
        }
        if !round.is_players_turn(symbol) {
            return Err(GameError::NotYourTurn);
        }

        let outcome = round.try_play_move(position)?;
        debug!(room = %self.id, conn = %conn, position, ?outcome, "move applied");

        Ok(MoveApplied {
            outcome,
            state: Broadcast {
                payload: state.snapshot(),
                audience: state.members(),
            },
        })
    }

    /// Take back the last move of the round, if there is one.
    pub async fn undo(&self) -> UndoOutcome {
        let mut state = self.lock().await;

        let undone = state.round_mut().try_undo_last_move();
        if let Err(err) = &undone {
            debug!(room = %self.id, %err, "undo ignored");
        }

        UndoOutcome {
            undone,
            state: Broadcast {
                payload: state.snapshot(),
                audience: state.members(),
            },
        }
    }

    /// Start a new round: fresh board of `board_size`, round log cleared.
    pub async fn new_round(&self, board_size: usize) -> Result<Broadcast<GameSnapshot>, GameError> {
        let mut state = self.lock().await;

        let round = state.round_mut();
        round.set_board_size(board_size)?;
        round.history_mut().clear_round_history();
        info!(room = %self.id, board_size, "new round");

        Ok(Broadcast {
            payload: state.snapshot(),
            audience: state.members(),
        })
    }

    /// Remove `conn` from the room. Returns the updated lobby row for the
    /// remaining members, or `None` if `conn` was not here.
    pub async fn leave(&self, conn: ConnectionId) -> Option<Broadcast<LobbySummary>> {
        let mut state = self.lock().await;

        let role = state.remove_connection(conn)?;
        info!(room = %self.id, conn = %conn, role = %role, "left");

        Some(Broadcast {
            payload: state.summary(),
            audience: state.members(),
        })
    }

    pub async fn contains(&self, conn: ConnectionId) -> bool {
        self.lock().await.contains(conn)
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.lock().await.snapshot()
    }

    pub async fn summary(&self) -> LobbySummary {
        self.lock().await.summary()
    }

    pub async fn stats(&self) -> RoomStats {
        self.lock().await.stats()
    }
}
