// crates/game-core/tests/rooms.rs
use std::sync::Arc;

use game_core::{ConnectionId, GameError, MoveOutcome, PositionCount, Role, Room, RoundStatus, Symbol};

const A: ConnectionId = ConnectionId(1);
const B: ConnectionId = ConnectionId(2);
const C: ConnectionId = ConnectionId(3);
const D: ConnectionId = ConnectionId(4);

async fn seated_room() -> Room {
    let room = Room::new("lobby-1", 3).unwrap();
    room.join(A, "Alice").await;
    room.join(B, "Bob").await;
    room
}

#[tokio::test]
async fn roles_are_assigned_in_join_order() {
    let room = Room::new("r", 3).unwrap();

    assert_eq!(room.join(A, "Alice").await.role, Role::Player(Symbol::X));
    assert_eq!(room.join(B, "Bob").await.role, Role::Player(Symbol::O));
    assert_eq!(room.join(C, "Carol").await.role, Role::Spectator);
    assert_eq!(room.join(D, "Dan").await.role, Role::Spectator);
}

#[tokio::test]
async fn rejoining_returns_same_role() {
    let room = seated_room().await;
    room.join(C, "Carol").await;

    assert_eq!(room.join(A, "Alice").await.role, Role::Player(Symbol::X));
    assert_eq!(room.join(B, "Bob").await.role, Role::Player(Symbol::O));
    assert_eq!(room.join(C, "Carol").await.role, Role::Spectator);
}

#[tokio::test]
async fn join_binds_player_names_not_spectator_names() {
    let room = Room::new("r", 3).unwrap();
    let first = room.join(A, "Alice").await;
    assert_eq!(first.snapshot.player_x, "Alice");
    assert_eq!(first.snapshot.player_o, "Player O");

    room.join(B, "Bob").await;
    let spectator = room.join(C, "Carol").await;

    assert_eq!(spectator.snapshot.player_x, "Alice");
    assert_eq!(spectator.snapshot.player_o, "Bob");
    assert_eq!(spectator.lobby.payload.spectators, 1);
    assert_eq!(spectator.lobby.audience, vec![A, B, C]);
}

#[tokio::test]
async fn vacated_seat_goes_to_next_new_connection() {
    let room = seated_room().await;
    room.join(C, "Carol").await;

    let lobby = room.leave(A).await.unwrap();
    assert!(!lobby.payload.x_seated);
    assert!(lobby.payload.o_seated);
    assert_eq!(lobby.audience, vec![B, C]);

    // Existing spectator keeps its role; the next new connection takes X.
    assert_eq!(room.join(C, "Carol").await.role, Role::Spectator);
    assert_eq!(room.join(D, "Dan").await.role, Role::Player(Symbol::X));
}

#[tokio::test]
async fn new_holder_of_a_vacated_seat_starts_without_wins() {
    let room = seated_room().await;
    for (conn, pos) in [(A, 1), (B, 4), (A, 2), (B, 5), (A, 3)] {
        room.play_move(conn, pos).await.unwrap();
    }
    room.new_round(3).await.unwrap();
    room.play_move(A, 9).await.unwrap();

    room.leave(A).await.unwrap();
    let joined = room.join(C, "Dan").await;

    assert_eq!(joined.role, Role::Player(Symbol::X));
    assert_eq!(joined.lobby.payload.player_x, "Dan");
    assert_eq!(joined.lobby.payload.player_x_wins, 0);
    // Turn stays with the seat: O is still to move.
    assert_eq!(joined.snapshot.current_symbol, Some(Symbol::O));
}

#[tokio::test]
async fn rejoining_own_seat_keeps_wins() {
    let room = seated_room().await;
    for (conn, pos) in [(A, 1), (B, 4), (A, 2), (B, 5), (A, 3)] {
        room.play_move(conn, pos).await.unwrap();
    }

    let joined = room.join(A, "Alicia").await;

    assert_eq!(joined.lobby.payload.player_x, "Alicia");
    assert_eq!(joined.lobby.payload.player_x_wins, 1);
}

#[tokio::test]
async fn leaving_unknown_connection_is_none_and_keeps_game() {
    let room = seated_room().await;
    room.play_move(A, 5).await.unwrap();

    assert!(room.leave(D).await.is_none());
    room.leave(B).await.unwrap();

    let snapshot = room.snapshot().await;
    assert_eq!(snapshot.board, "....X....");
    assert_eq!(snapshot.moves.len(), 1);
}

#[tokio::test]
async fn moves_are_checked_against_role_and_turn() {
    let room = seated_room().await;
    room.join(C, "Carol").await;

    assert_eq!(room.play_move(C, 1).await.unwrap_err(), GameError::SpectatorForbidden);
    assert_eq!(room.play_move(D, 1).await.unwrap_err(), GameError::SpectatorForbidden);
    assert_eq!(room.play_move(B, 1).await.unwrap_err(), GameError::NotYourTurn);

    let applied = room.play_move(A, 1).await.unwrap();
    assert_eq!(applied.outcome, MoveOutcome::Continue);
    assert_eq!(applied.state.payload.board, "X........");
    assert_eq!(applied.state.payload.current_symbol, Some(Symbol::O));
    assert_eq!(applied.state.audience, vec![A, B, C]);

    assert_eq!(room.play_move(B, 1).await.unwrap_err(), GameError::IllegalMove(1));
    assert_eq!(room.snapshot().await.board, "X........");
}

#[tokio::test]
async fn winning_move_is_reported_in_snapshot_and_lobby() {
    let room = seated_room().await;
    for (conn, pos) in [(A, 1), (B, 4), (A, 2), (B, 5)] {
        room.play_move(conn, pos).await.unwrap();
    }

    let applied = room.play_move(A, 3).await.unwrap();

    assert_eq!(applied.outcome, MoveOutcome::Win);
    assert_eq!(applied.state.payload.status, RoundStatus::Win);
    assert_eq!(applied.state.payload.winner.as_deref(), Some("Alice"));

    let summary = room.summary().await;
    assert_eq!(summary.player_x_wins, 1);
    assert_eq!(summary.current_player.as_deref(), Some("Alice"));

    assert_eq!(room.play_move(B, 9).await.unwrap_err(), GameError::IllegalMove(9));
}

#[tokio::test]
async fn undo_broadcasts_state_even_when_nothing_to_undo() {
    let room = seated_room().await;

    let nothing = room.undo().await;
    assert_eq!(nothing.undone, Err(GameError::NothingToUndo));
    assert_eq!(nothing.state.payload.board, ".........");
    assert_eq!(nothing.state.audience, vec![A, B]);

    room.play_move(A, 7).await.unwrap();
    let undone = room.undo().await;
    assert_eq!(undone.undone.unwrap().position, 7);
    assert_eq!(undone.state.payload.board, ".........");
    assert_eq!(undone.state.payload.current_symbol, Some(Symbol::X));
}

#[tokio::test]
async fn new_round_resets_board_and_round_log_only() {
    let room = seated_room().await;
    for (conn, pos) in [(A, 1), (B, 4), (A, 2), (B, 5), (A, 3)] {
        room.play_move(conn, pos).await.unwrap();
    }

    let state = room.new_round(4).await.unwrap();

    assert_eq!(state.payload.board_size, 4);
    assert_eq!(state.payload.board, ".".repeat(16));
    assert_eq!(state.payload.status, RoundStatus::InProgress);
    assert!(state.payload.moves.is_empty());

    let stats = room.stats().await;
    assert_eq!(stats.total_moves, 5);
    assert_eq!(stats.round_moves, 0);
    assert_eq!(stats.player_x_wins, 1);
    assert_eq!(stats.position_usage.len(), 5);
    assert_eq!(stats.position_usage[0], PositionCount { position: 1, count: 1 });
}

#[tokio::test]
async fn new_round_with_bad_size_changes_nothing() {
    let room = seated_room().await;
    room.play_move(A, 1).await.unwrap();

    assert_eq!(room.new_round(2).await.unwrap_err(), GameError::InvalidSize(2));

    let snapshot = room.snapshot().await;
    assert_eq!(snapshot.board, "X........");
    assert_eq!(snapshot.moves.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_moves_for_the_same_turn_apply_once() {
    let room = Arc::new(seated_room().await);

    // X races itself on many cells; exactly one move may land before the
    // turn passes to O.
    let mut handles = Vec::new();
    for pos in 1..=9 {
        let room = Arc::clone(&room);
        handles.push(tokio::spawn(async move { room.play_move(A, pos).await }));
    }

    let mut applied = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => applied += 1,
            Err(err) => assert_eq!(err, GameError::NotYourTurn),
        }
    }

    let snapshot = room.snapshot().await;
    assert_eq!(applied, 1);
    assert_eq!(snapshot.moves.len(), 1);
    assert_eq!(snapshot.board.chars().filter(|c| *c == 'X').count(), 1);
    assert_eq!(snapshot.current_symbol, Some(Symbol::O));
}
