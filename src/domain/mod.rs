//! Domain layer: reply resolution and relay connection bookkeeping.
//!
//! The resolver is a pure question → answer table. The connection types
//! track which relay clients are currently attached.

pub mod connection_entry;
pub mod connection_id;
pub mod connection_registry;
pub mod resolver;

pub use connection_entry::ConnectionEntry;
pub use connection_id::ConnectionId;
pub use connection_registry::ConnectionRegistry;
pub use resolver::{DEFAULT_REPLY, Reply, ReplyResolver};
