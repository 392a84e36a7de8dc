//! Registry of open relay connections.
//!
//! [`ConnectionRegistry`] is owned by the relay server and indexed by
//! [`ConnectionId`]. Entries are inserted when a WebSocket upgrade
//! completes and removed when the connection's receive loop ends.
//! Connections never read each other's entries.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{ConnectionEntry, ConnectionId};
use crate::error::RelayError;

/// Set of live relay connections.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: RwLock<HashMap<ConnectionId, ConnectionEntry>>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Internal`] if the ID is already registered.
    pub async fn insert(&self, entry: ConnectionEntry) -> Result<ConnectionId, RelayError> {
        let id = entry.connection_id;
        let mut map = self.connections.write().await;
        if map.contains_key(&id) {
            return Err(RelayError::Internal(format!(
                "connection {id} already registered"
            )));
        }
        map.insert(id, entry);
        Ok(id)
    }

    /// Bumps the answered-message counter of a connection, returning the
    /// new count. Unknown IDs are ignored.
    pub async fn record_message(&self, id: ConnectionId) -> Option<u64> {
        let mut map = self.connections.write().await;
        map.get_mut(&id).map(|entry| {
            entry.messages_handled += 1;
            entry.messages_handled
        })
    }

    /// Returns a copy of the entry for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConnectionNotFound`] if no such connection is
    /// registered.
    pub async fn get(&self, id: ConnectionId) -> Result<ConnectionEntry, RelayError> {
        self.connections
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RelayError::ConnectionNotFound(*id.as_uuid()))
    }

    /// Removes a connection, returning its final entry.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConnectionNotFound`] if the connection was
    /// already removed.
    pub async fn remove(&self, id: ConnectionId) -> Result<ConnectionEntry, RelayError> {
        self.connections
            .write()
            .await
            .remove(&id)
            .ok_or(RelayError::ConnectionNotFound(*id.as_uuid()))
    }

    /// Returns the number of open connections.
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Returns `true` if no connection is open.
    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }
}
