//! Relay service: connection lifecycle and per-frame answering.

use std::sync::Arc;

use crate::domain::{ConnectionEntry, ConnectionId, ConnectionRegistry, ReplyResolver};
use crate::error::RelayError;

/// Coordinates the chatbot relay.
///
/// Owns the [`ConnectionRegistry`] and shares the immutable
/// [`ReplyResolver`]. Each WebSocket connection calls [`Self::open`] once,
/// [`Self::answer`] per inbound frame, and [`Self::close`] on the way out.
#[derive(Debug, Clone)]
pub struct RelayService {
    registry: Arc<ConnectionRegistry>,
    resolver: Arc<ReplyResolver>,
}

impl RelayService {
    /// Creates a new `RelayService` with an empty registry.
    #[must_use]
    pub fn new(resolver: Arc<ReplyResolver>) -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new()),
            resolver,
        }
    }

    /// Registers a newly upgraded connection.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the generated ID collides with a live one.
    pub async fn open(&self, peer: Option<String>) -> Result<ConnectionId, RelayError> {
        let connection_id = ConnectionId::new();
        self.registry
            .insert(ConnectionEntry::new(connection_id, peer.clone()))
            .await?;
        tracing::info!(%connection_id, peer = peer.as_deref().unwrap_or("-"), "client connected");
        Ok(connection_id)
    }

    /// Computes the reply to one inbound frame of `connection_id`.
    ///
    /// Always produces a reply; unknown questions get the default answer.
    pub async fn answer(&self, connection_id: ConnectionId, question: &str) -> String {
        tracing::debug!(%connection_id, question, "question received");
        let reply = self.resolver.resolve(question);
        if self.registry.record_message(connection_id).await.is_none() {
            tracing::warn!(%connection_id, "answered frame for unregistered connection");
        }
        reply
    }

    /// Drops a connection from the registry.
    pub async fn close(&self, connection_id: ConnectionId) {
        match self.registry.remove(connection_id).await {
            Ok(entry) => tracing::info!(
                %connection_id,
                messages = entry.messages_handled,
                "client disconnected"
            ),
            Err(err) => tracing::warn!(%connection_id, error = %err, "close on unknown connection"),
        }
    }

    /// Returns a snapshot of one connection's bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConnectionNotFound`] if it is not open.
    pub async fn connection(&self, connection_id: ConnectionId) -> Result<ConnectionEntry, RelayError> {
        self.registry.get(connection_id).await
    }

    /// Number of currently open connections.
    pub async fn open_connections(&self) -> usize {
        self.registry.len().await
    }
}
