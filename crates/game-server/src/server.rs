//! TCP listener and top-level server wiring.
//!
//! This module:
//! - Listens on the configured address/port.
//! - Accepts new TCP connections, up to `max_clients` at a time.
//! - Assigns each connection a `ConnectionId` and greets it.
//! - Spawns a per-client task to handle its I/O.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::{ConnectionId, ServerMessage};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, RwLock};
use tracing::{info, warn};

use crate::client;
use crate::config::Config;
use crate::export::FileMoveLog;
use crate::gateway::Gateway;
use crate::types::{ClientRegistry, OutboundRx, OutboundTx};

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

fn next_connection_id() -> ConnectionId {
    ConnectionId(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// Build the gateway described by `config`.
pub fn build_gateway(config: &Config) -> Gateway {
    let clients: ClientRegistry = Arc::new(RwLock::new(HashMap::new()));
    let gateway = Gateway::new(clients, config.default_board_size);

    match &config.export_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "move-log export enabled");
            gateway.with_move_log(Arc::new(FileMoveLog::new(dir.clone())))
        }
        None => gateway,
    }
}

/// Run the TCP server with the given configuration.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "listening");

    serve(listener, build_gateway(&config), config.max_clients).await
}

/// Accept loop on an already-bound listener.
pub async fn serve(listener: TcpListener, gateway: Gateway, max_clients: usize) -> Result<()> {
    loop {
        let (stream, peer_addr) = listener.accept().await.context("accepting connection")?;

        if gateway.client_count().await >= max_clients {
            warn!(%peer_addr, max_clients, "rejecting connection: max_clients reached");
            // Dropping the stream closes it.
            continue;
        }

        let conn = next_connection_id();
        info!(conn = %conn, %peer_addr, "accepted");

        let (out_tx, out_rx): (OutboundTx, OutboundRx) = mpsc::unbounded_channel();
        gateway.register_client(conn, out_tx).await;
        gateway
            .send_to(conn, ServerMessage::Welcome { connection_id: conn.0 })
            .await;

        let gateway = gateway.clone();
        tokio::spawn(async move {
            if let Err(e) = client::run_client(conn, stream, gateway, out_rx).await {
                warn!(conn = %conn, error = %format!("{:#}", e), "client error");
            }
        });
    }
}
