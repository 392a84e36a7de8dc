//! # chat-relay
//!
//! A WebSocket chatbot relay and a small Spotify token/search proxy.
//!
//! The relay answers each text frame with a canned reply looked up in a
//! fixed question table. The proxy keeps the Spotify client credentials on
//! the server and republishes the upstream JSON.
//!
//! ## Architecture
//!
//! ```text
//! WebSocket clients (:8080)          HTTP clients (:3000)
//!     │                                  │
//!     ├── WS Handler (ws/)               ├── REST Handlers (api/)
//!     │                                  │
//!     ├── RelayService (service/)        ├── SpotifyService (service/)
//!     │                                  │
//!     ├── ReplyResolver (domain/)        └── accounts.spotify.com
//!     └── ConnectionRegistry (domain/)       api.spotify.com
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod server;
pub mod service;
pub mod ws;
