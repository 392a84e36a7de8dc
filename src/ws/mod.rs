//! WebSocket layer: the chatbot relay.
//!
//! Clients connect to the relay listener and exchange plain text frames:
//! one question in, one answer out.

pub mod connection;
pub mod handler;
pub mod messages;
