//! Line-protocol TCP server for tic-tac-toe rooms.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use game_server::config::Config;
use game_server::{logging, server};

#[derive(Parser)]
#[clap(name = "game-server")]
#[clap(about = "Multi-room tic-tac-toe server")]
struct Cli {
    /// Address to bind (overrides GAME_BIND_ADDR)
    #[clap(short, long)]
    bind: Option<String>,

    /// Port to listen on (overrides GAME_PORT)
    #[clap(short, long)]
    port: Option<u16>,

    /// Maximum simultaneous connections (overrides GAME_MAX_CLIENTS)
    #[clap(long)]
    max_clients: Option<usize>,

    /// Board size for new rooms when a join names none
    #[clap(long)]
    board_size: Option<usize>,

    /// Directory for finished-round move logs (overrides GAME_EXPORT_DIR)
    #[clap(short, long)]
    export_dir: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug)?;

    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(max_clients) = cli.max_clients {
        config.max_clients = max_clients;
    }
    if let Some(size) = cli.board_size {
        config.default_board_size = size;
    }
    if cli.export_dir.is_some() {
        config.export_dir = cli.export_dir;
    }
    config.validate()?;

    info!(
        addr = %config.socket_addr_string(),
        max_clients = config.max_clients,
        board_size = config.default_board_size,
        "starting game-server"
    );

    server::run(config).await
}
