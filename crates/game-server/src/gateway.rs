//! Session gateway: turns connection requests into room operations and
//! routes the resulting messages.
//!
//! Routing policy:
//! - `Joined`, `LobbyList`, `Stats`, `Error`: sent **only** to the caller.
//! - `State`, `Lobby`: sent to every connection in the affected room.
//!
//! Room operations hand back their payload together with the audience
//! captured under the room gate; delivery happens after the gate is
//! released.

use std::sync::Arc;

use game_core::{
    Broadcast, ConnectionId, GameError, Move, MoveOutcome, Request, Room, RoomRegistry,
    ServerMessage, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use game_protocol::parse_request_line;
use game_protocol::wire_types::validate_room_id;
use tracing::{debug, info, warn};

use crate::export::MoveLogSink;
use crate::types::{ClientRegistry, OutboundTx};

/// Shared handle used by every client task.
#[derive(Clone)]
pub struct Gateway {
    registry: Arc<RoomRegistry>,
    clients: ClientRegistry,
    move_log: Option<Arc<dyn MoveLogSink>>,
    default_board_size: usize,
}

impl Gateway {
    pub fn new(clients: ClientRegistry, default_board_size: usize) -> Self {
        Gateway {
            registry: Arc::new(RoomRegistry::new()),
            clients,
            move_log: None,
            default_board_size,
        }
    }

    /// Export every finished round's moves to `sink`.
    pub fn with_move_log(mut self, sink: Arc<dyn MoveLogSink>) -> Self {
        self.move_log = Some(sink);
        self
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    pub async fn register_client(&self, conn: ConnectionId, tx: OutboundTx) {
        let mut guard = self.clients.write().await;
        guard.insert(conn, tx);
    }

    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Parse and dispatch one raw request line from `conn`.
    pub async fn handle_line(&self, conn: ConnectionId, line: &str) {
        match parse_request_line(line) {
            Ok(Some(request)) => self.handle(conn, request).await,
            Ok(None) => {}
            Err(err) => {
                debug!(conn = %conn, %err, "rejected line");
                self.send_to(conn, ServerMessage::error(err.to_string())).await;
            }
        }
    }

    /// Dispatch one request. Failures are reported to `conn` only.
    pub async fn handle(&self, conn: ConnectionId, request: Request) {
        let result = match request {
            Request::Join {
                room_id,
                name,
                board_size,
            } => self.join(conn, room_id, &name, board_size).await,
            Request::Move { room_id, position } => self.play_move(conn, &room_id, position).await,
            Request::Undo { room_id } => self.undo(&room_id).await,
            Request::NewRound {
                room_id,
                board_size,
            } => self.new_round(&room_id, board_size).await,
            Request::ListLobby => {
                let rooms = self.registry.list_summaries().await;
                self.send_to(conn, ServerMessage::LobbyList { rooms }).await;
                Ok(())
            }
            Request::Stats { room_id } => self.stats(conn, &room_id).await,
        };

        if let Err(err) = result {
            debug!(conn = %conn, %err, "request failed");
            self.send_to(conn, ServerMessage::error(err.to_string())).await;
        }
    }

    /// Forget `conn`: drop its outbound channel and free its seats.
    pub async fn disconnect(&self, conn: ConnectionId) {
        {
            let mut guard = self.clients.write().await;
            guard.remove(&conn);
        }

        for room in self.registry.rooms_with_connection(conn).await {
            if let Some(lobby) = room.leave(conn).await {
                self.broadcast(lobby, ServerMessage::Lobby).await;
            }
        }
        info!(conn = %conn, "disconnected");
    }

    async fn join(
        &self,
        conn: ConnectionId,
        room_id: String,
        name: &str,
        board_size: Option<usize>,
    ) -> Result<(), GameError> {
        if !validate_room_id(&room_id) {
            return Err(GameError::InvalidRoomId(room_id));
        }

        // The size only matters when this join creates the room.
        let size = board_size.unwrap_or(self.default_board_size);
        let room = self.registry.get_or_create(&room_id, || {
            checked_size(size).and_then(|size| Room::new(room_id.as_str(), size))
        })?;

        let outcome = room.join(conn, name).await;

        self.send_to(
            conn,
            ServerMessage::Joined {
                room_id,
                role: outcome.role,
            },
        )
        .await;
        self.send_to(conn, ServerMessage::State(outcome.snapshot)).await;
        self.broadcast(outcome.lobby, ServerMessage::Lobby).await;
        Ok(())
    }

    async fn play_move(
        &self,
        conn: ConnectionId,
        room_id: &str,
        position: usize,
    ) -> Result<(), GameError> {
        let room = self.room(room_id)?;
        let applied = room.play_move(conn, position).await?;

        if matches!(applied.outcome, MoveOutcome::Win | MoveOutcome::Draw) {
            info!(room = %room_id, outcome = ?applied.outcome, "round finished");
            self.export_round(room_id, applied.state.payload.moves.clone());
        }

        self.broadcast(applied.state, ServerMessage::State).await;
        Ok(())
    }

    async fn undo(&self, room_id: &str) -> Result<(), GameError> {
        let room = self.room(room_id)?;
        let outcome = room.undo().await;
        self.broadcast(outcome.state, ServerMessage::State).await;
        Ok(())
    }

    async fn new_round(&self, room_id: &str, board_size: usize) -> Result<(), GameError> {
        let room = self.room(room_id)?;
        let state = room.new_round(checked_size(board_size)?).await?;
        self.broadcast(state, ServerMessage::State).await;
        Ok(())
    }

    async fn stats(&self, conn: ConnectionId, room_id: &str) -> Result<(), GameError> {
        let room = self.room(room_id)?;
        let stats = room.stats().await;
        self.send_to(conn, ServerMessage::Stats(stats)).await;
        Ok(())
    }

    fn room(&self, room_id: &str) -> Result<Arc<Room>, GameError> {
        self.registry
            .try_get(room_id)
            .ok_or_else(|| GameError::RoomNotFound(room_id.to_string()))
    }

    fn export_round(&self, room_id: &str, moves: Vec<Move>) {
        let Some(sink) = self.move_log.clone() else {
            return;
        };
        let room_id = room_id.to_string();

        tokio::spawn(async move {
            match sink.write_round(&room_id, &moves).await {
                Ok(path) => info!(room = %room_id, path = %path.display(), "move log exported"),
                Err(err) => warn!(room = %room_id, error = %format!("{:#}", err), "move log export failed"),
            }
        });
    }

    /// Send to one connection; a closed channel means it is going away.
    pub async fn send_to(&self, conn: ConnectionId, msg: ServerMessage) {
        let guard = self.clients.read().await;
        if let Some(tx) = guard.get(&conn) {
            let _ = tx.send(msg);
        }
    }

    async fn broadcast<T>(&self, broadcast: Broadcast<T>, wrap: impl FnOnce(T) -> ServerMessage) {
        let msg = wrap(broadcast.payload);
        let guard = self.clients.read().await;
        for conn in &broadcast.audience {
            if let Some(tx) = guard.get(conn) {
                let _ = tx.send(msg.clone());
            }
        }
    }
}

fn checked_size(size: usize) -> Result<usize, GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(GameError::InvalidSize(size))
    }
}
