//! Service layer: relay coordination and the upstream Spotify client.
//!
//! [`RelayService`] drives chatbot connections through the domain types.
//! [`SpotifyService`] performs the outbound calls behind the HTTP proxy.

pub mod relay_service;
pub mod spotify_service;

pub use relay_service::RelayService;
pub use spotify_service::SpotifyService;
