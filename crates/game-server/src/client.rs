//! Per-connection I/O.
//!
//! Request lines in, JSON lines out. The writer runs in its own task and
//! drains the connection's outbound channel; the reader feeds every line
//! to the gateway until EOF or a read error.

use anyhow::{Context, Result};
use game_core::{ConnectionId, ServerMessage};
use game_protocol::encode_server_message;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::gateway::Gateway;
use crate::types::OutboundRx;

/// Run the client I/O loop for a single connection.
///
/// Always ends with `gateway.disconnect(conn)`, whatever the reason the
/// read side stopped.
pub async fn run_client(
    conn: ConnectionId,
    stream: TcpStream,
    gateway: Gateway,
    mut out_rx: OutboundRx,
) -> Result<()> {
    let (read_half, write_half) = stream.into_split();

    let writer = tokio::spawn(async move {
        let mut write_half = write_half;
        while let Some(msg) = out_rx.recv().await {
            if let Err(e) = write_json_line(&mut write_half, &msg).await {
                warn!(conn = %conn, error = %format!("{:#}", e), "write failed");
                break;
            }
        }
    });

    let mut lines = BufReader::new(read_half).lines();
    let result = loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                debug!(conn = %conn, line = %line.trim(), "request line");
                gateway.handle_line(conn, &line).await;
            }
            Ok(None) => break Ok(()),
            Err(e) => break Err(e).context("reading request line"),
        }
    };

    // Dropping the registry's sender lets the writer drain and stop.
    gateway.disconnect(conn).await;
    let _ = writer.await;

    result
}

async fn write_json_line(stream: &mut OwnedWriteHalf, msg: &ServerMessage) -> Result<()> {
    let mut line = encode_server_message(msg)?;
    line.push('\n');

    stream.write_all(line.as_bytes()).await?;
    stream.flush().await?;
    Ok(())
}
