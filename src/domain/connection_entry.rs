//! Per-connection bookkeeping held by the relay.

use chrono::{DateTime, Utc};

use super::ConnectionId;

/// Server-side record of one open relay connection.
///
/// Created when a client connects and dropped on disconnect. Nothing in
/// here survives the connection.
#[derive(Debug, Clone)]
pub struct ConnectionEntry {
    /// Connection identity.
    pub connection_id: ConnectionId,

    /// Remote address as reported by the listener, if known.
    pub peer: Option<String>,

    /// When the upgrade completed.
    pub connected_at: DateTime<Utc>,

    /// Number of inbound frames answered so far.
    pub messages_handled: u64,
}

impl ConnectionEntry {
    /// Creates a fresh entry stamped with the current time.
    #[must_use]
    pub fn new(connection_id: ConnectionId, peer: Option<String>) -> Self {
        Self {
            connection_id,
            peer,
            connected_at: Utc::now(),
            messages_handled: 0,
        }
    }
}
