//! Shared types for the game TCP server.
//!
//! This module defines:
//! - channel aliases between the gateway and client writer tasks
//! - the registry of connected clients

use std::collections::HashMap;
use std::sync::Arc;

use game_core::{ConnectionId, ServerMessage};
use tokio::sync::mpsc;
use tokio::sync::RwLock;

/// Outbound messages from the gateway to a given client.
pub type OutboundTx = mpsc::UnboundedSender<ServerMessage>;
pub type OutboundRx = mpsc::UnboundedReceiver<ServerMessage>;

/// Registry of connected clients and their outbound channels.
///
/// - Key: `ConnectionId`
/// - Value: `OutboundTx` to send `ServerMessage`s to that client.
pub type ClientRegistry = Arc<RwLock<HashMap<ConnectionId, OutboundTx>>>;
