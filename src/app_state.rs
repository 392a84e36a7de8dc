//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{RelayService, SpotifyService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chatbot relay: resolver plus connection registry.
    pub relay: Arc<RelayService>,
    /// Upstream client behind the proxy endpoints.
    pub spotify: Arc<SpotifyService>,
}
