//! chat-relay server entry point.
//!
//! Starts the WebSocket relay and the HTTP proxy on their own listeners.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use chat_relay::app_state::AppState;
use chat_relay::config::{LogFormat, RelayConfig};
use chat_relay::domain::ReplyResolver;
use chat_relay::server;
use chat_relay::service::{RelayService, SpotifyService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = RelayConfig::from_env().context("invalid listen address")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(
        relay = %config.relay_addr,
        proxy = %config.proxy_addr,
        "starting chat-relay"
    );

    // Build service layer
    let relay = Arc::new(RelayService::new(Arc::new(ReplyResolver::new())));
    let spotify = Arc::new(SpotifyService::new(config.spotify.clone())?);
    let app_state = AppState { relay, spotify };

    // Bind listeners
    let relay_listener = tokio::net::TcpListener::bind(config.relay_addr)
        .await
        .with_context(|| format!("binding relay on {}", config.relay_addr))?;
    tracing::info!(addr = %config.relay_addr, "websocket relay listening");

    let proxy_listener = tokio::net::TcpListener::bind(config.proxy_addr)
        .await
        .with_context(|| format!("binding proxy on {}", config.proxy_addr))?;
    tracing::info!(addr = %config.proxy_addr, "http proxy listening");

    tokio::select! {
        res = server::serve_relay(relay_listener, app_state.clone()) => res.context("relay server")?,
        res = server::serve_proxy(proxy_listener, app_state, &config.static_dir) => res.context("proxy server")?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    Ok(())
}
