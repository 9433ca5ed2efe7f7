//! Process-wide set of rooms, keyed by room id.
//!
//! Rooms are created on first reference and never evicted. Creation goes
//! through the map's entry API, so two simultaneous requests for an unseen
//! id observe one room and the factory runs once: the vacant entry holds
//! the shard's write lock while the factory runs.
//!
//! Rooms never reference the registry.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::role::ConnectionId;
use crate::room::Room;
use crate::snapshot::LobbySummary;

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Room>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        RoomRegistry::default()
    }

    /// Get the room for `id`, creating it with `factory` if it does not exist.
    ///
    /// `factory` is invoked at most once per id. If it fails, nothing is
    /// inserted and the error is returned to this caller only.
    pub fn get_or_create<F, E>(&self, id: &str, factory: F) -> Result<Arc<Room>, E>
    where
        F: FnOnce() -> Result<Room, E>,
    {
        match self.rooms.entry(id.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let room = Arc::new(factory()?);
                entry.insert(Arc::clone(&room));
                Ok(room)
            }
        }
    }

    /// Lookup only; never creates.
    pub fn try_get(&self, id: &str) -> Option<Arc<Room>> {
        self.rooms.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Point-in-time list of every room.
    ///
    /// Map references are released before returning, so callers may lock
    /// the rooms (and await) freely.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        self.rooms.iter().map(|entry| Arc::clone(entry.value())).collect()
    }

    /// Lobby rows for every room, sorted by room id.
    ///
    /// Rooms created while this runs may or may not appear.
    pub async fn list_summaries(&self) -> Vec<LobbySummary> {
        let mut summaries = Vec::new();
        for room in self.rooms() {
            summaries.push(room.summary().await);
        }
        summaries.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        summaries
    }

    /// Rooms whose role map currently contains `conn`.
    pub async fn rooms_with_connection(&self, conn: ConnectionId) -> Vec<Arc<Room>> {
        let mut found = Vec::new();
        for room in self.rooms() {
            if room.contains(conn).await {
                found.push(room);
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
