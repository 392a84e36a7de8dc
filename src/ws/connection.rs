//! Relay loop for a single WebSocket connection.
//!
//! Frames are answered strictly one at a time: the reply to a frame is
//! sent before the next frame is read, so replies keep arrival order.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::messages::Inbound;
use crate::service::RelayService;

/// Runs the receive/answer loop for one client until it disconnects.
///
/// Registers the connection on entry and always unregisters it on exit.
pub async fn run_connection(socket: WebSocket, peer: SocketAddr, relay: Arc<RelayService>) {
    let connection_id = match relay.open(Some(peer.to_string())).await {
        Ok(id) => id,
        Err(err) => {
            tracing::error!(%peer, error = %err, "could not register connection");
            return;
        }
    };

    let (mut ws_tx, mut ws_rx) = socket.split();

    while let Some(frame) = ws_rx.next().await {
        let question = match frame {
            Ok(msg) => match Inbound::from(msg) {
                Inbound::Question(q) => q,
                Inbound::Control => continue,
                Inbound::Closed => break,
            },
            Err(err) => {
                tracing::debug!(%connection_id, error = %err, "ws receive failed");
                break;
            }
        };

        let reply = relay.answer(connection_id, &question).await;
        if let Err(err) = ws_tx.send(Message::text(reply)).await {
            tracing::debug!(%connection_id, error = %err, "ws send failed");
            break;
        }
    }

    relay.close(connection_id).await;
}
