//! Minimal interactive client: request lines from stdin, server messages
//! pretty-printed to stdout.
//!
//! `GAME_CLIENT_ADDR` overrides the default `127.0.0.1:9100`.

use std::env;

use anyhow::Result;
use game_core::ServerMessage;
use game_protocol::{decode_server_message, parse_request_line};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> Result<()> {
    let addr = env::var("GAME_CLIENT_ADDR").unwrap_or_else(|_| "127.0.0.1:9100".to_string());

    println!("Connecting to {}...", addr);
    let stream = TcpStream::connect(&addr).await?;
    println!("Connected.");
    println!("Type request lines like:");
    println!("  J, room1, Alice[, 3]");
    println!("  M, room1, 5");
    println!("  U, room1");
    println!("  R, room1, 4");
    println!("  L");
    println!("  S, room1");
    println!("Type 'quit' or 'exit' to leave.\n");

    let (read_half, mut write_half) = stream.into_split();

    let printer = tokio::spawn(async move {
        let mut lines = BufReader::new(read_half).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match decode_server_message(&line) {
                Ok(msg) => print_message(&msg),
                Err(e) => eprintln!("undecodable server line {:?}: {}", line, e),
            }
        }
        println!("Server closed the connection.");
    });

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = stdin.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        // Catch typos locally; the server would reject them anyway.
        if let Err(e) = parse_request_line(trimmed) {
            eprintln!("Not a valid request: {}", e);
            continue;
        }

        write_half.write_all(format!("{}\n", trimmed).as_bytes()).await?;
    }

    printer.abort();
    println!("Exiting client.");
    Ok(())
}

fn print_message(msg: &ServerMessage) {
    match msg {
        ServerMessage::State(state) => {
            println!(
                "[{}] {} vs {} - {}",
                state.room_id, state.player_x, state.player_o, state.status
            );
            let size = state.board_size.max(1);
            let cells: Vec<char> = state.board.chars().collect();
            for row in cells.chunks(size) {
                let row: String = row.iter().map(|c| format!(" {}", c)).collect();
                println!("  {}", row);
            }
            if let Some(winner) = &state.winner {
                println!("  winner: {}", winner);
            }
        }
        ServerMessage::Error { message } => eprintln!("error: {}", message),
        other => println!("{:?}", other),
    }
}
