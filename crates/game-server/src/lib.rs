//! game-server
//!
//! Multi-client async TCP server hosting tic-tac-toe rooms.

pub mod config;
pub mod export;
pub mod gateway;
pub mod logging;
pub mod server;
pub mod types;

// internal module, not re-exported
mod client;
