// crates/game-server/tests/tcp.rs
use std::time::Duration;

use game_core::{Role, ServerMessage, Symbol};
use game_protocol::decode_server_message;
use game_server::config::Config;
use game_server::server::{build_gateway, serve};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

struct TestClient {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    async fn connect(addr: &str) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (read_half, writer) = stream.into_split();
        TestClient {
            lines: BufReader::new(read_half).lines(),
            writer,
        }
    }

    async fn send(&mut self, line: &str) {
        self.writer.write_all(format!("{}\n", line).as_bytes()).await.unwrap();
    }

    async fn recv(&mut self) -> ServerMessage {
        let line = timeout(Duration::from_secs(2), self.lines.next_line())
            .await
            .expect("timed out waiting for a message")
            .unwrap()
            .expect("connection closed");
        decode_server_message(&line).unwrap()
    }
}

async fn start_server(max_clients: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let gateway = build_gateway(&Config::default());

    tokio::spawn(async move {
        let _ = serve(listener, gateway, max_clients).await;
    });
    addr
}

#[tokio::test]
async fn two_players_over_tcp() {
    let addr = start_server(8).await;

    let mut alice = TestClient::connect(&addr).await;
    assert!(matches!(alice.recv().await, ServerMessage::Welcome { .. }));
    let mut bob = TestClient::connect(&addr).await;
    assert!(matches!(bob.recv().await, ServerMessage::Welcome { .. }));

    alice.send("J, arena, Alice").await;
    assert!(matches!(
        alice.recv().await,
        ServerMessage::Joined { role: Role::Player(Symbol::X), .. }
    ));
    assert!(matches!(alice.recv().await, ServerMessage::State(_)));
    assert!(matches!(alice.recv().await, ServerMessage::Lobby(_)));

    bob.send("J, arena, Bob").await;
    assert!(matches!(
        bob.recv().await,
        ServerMessage::Joined { role: Role::Player(Symbol::O), .. }
    ));
    assert!(matches!(bob.recv().await, ServerMessage::State(_)));
    assert!(matches!(bob.recv().await, ServerMessage::Lobby(_)));
    assert!(matches!(alice.recv().await, ServerMessage::Lobby(l) if l.player_o == "Bob"));

    alice.send("M, arena, 5").await;
    for client in [&mut alice, &mut bob] {
        match client.recv().await {
            ServerMessage::State(s) => assert_eq!(s.board, "....X...."),
            other => panic!("expected state, got {:?}", other),
        }
    }

    bob.send("garbage").await;
    assert!(matches!(bob.recv().await, ServerMessage::Error { .. }));

    drop(alice);
    match bob.recv().await {
        ServerMessage::Lobby(l) => assert!(!l.x_seated),
        other => panic!("expected lobby, got {:?}", other),
    }
}

#[tokio::test]
async fn connections_beyond_max_clients_are_closed() {
    let addr = start_server(1).await;

    let mut first = TestClient::connect(&addr).await;
    assert!(matches!(first.recv().await, ServerMessage::Welcome { .. }));

    let mut second = TestClient::connect(&addr).await;
    let next = timeout(Duration::from_secs(2), second.lines.next_line())
        .await
        .expect("timed out")
        .unwrap_or(None);
    assert!(next.is_none());
}
