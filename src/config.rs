//! Relay configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Every key has a default, so an empty environment starts the
//! relay on `:8080` and the proxy on `:3000`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `json` in any casing selects [`LogFormat::Json`]; anything else is text.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Upper bound on tracks returned by one search.
pub const MAX_SEARCH_LIMIT: usize = 10;

/// Keeps a configured search limit within `1..=MAX_SEARCH_LIMIT`. The
/// upstream rejects `limit=0`.
#[must_use]
pub fn clamp_search_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}

/// Spotify client-credentials settings.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// Application client ID.
    pub client_id: String,

    /// Application client secret.
    pub client_secret: String,

    /// Base URL of the accounts service (token endpoint lives under it).
    pub accounts_url: String,

    /// Base URL of the Web API (search endpoint lives under it).
    pub api_url: String,

    /// Maximum number of tracks returned by a search, within
    /// `1..=MAX_SEARCH_LIMIT`.
    pub search_limit: usize,

    /// Timeout applied to every upstream request.
    pub timeout: Duration,
}

/// Top-level configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address of the WebSocket chatbot relay.
    pub relay_addr: SocketAddr,

    /// Socket address of the HTTP proxy.
    pub proxy_addr: SocketAddr,

    /// Directory served as static files by the proxy.
    pub static_dir: PathBuf,

    /// Upstream credentials and endpoints.
    pub spotify: SpotifyConfig,

    /// Log output format.
    pub log_format: LogFormat,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `RELAY_LISTEN_ADDR` or `PROXY_LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let relay_addr: SocketAddr = std::env::var("RELAY_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;
        let proxy_addr: SocketAddr = std::env::var("PROXY_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let static_dir = PathBuf::from(env_or("STATIC_DIR", "public"));

        let spotify = SpotifyConfig {
            client_id: env_or("SPOTIFY_CLIENT_ID", "client_id"),
            client_secret: env_or("SPOTIFY_CLIENT_SECRET", "client_secret"),
            accounts_url: env_or("SPOTIFY_ACCOUNTS_URL", "https://accounts.spotify.com"),
            api_url: env_or("SPOTIFY_API_URL", "https://api.spotify.com"),
            search_limit: clamp_search_limit(parse_env("SEARCH_LIMIT", MAX_SEARCH_LIMIT)),
            timeout: Duration::from_secs(parse_env("UPSTREAM_TIMEOUT_SECS", 10)),
        };

        let log_format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            relay_addr,
            proxy_addr,
            static_dir,
            spotify,
            log_format,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        assert_eq!(parse_env("CHAT_RELAY_TEST_SURELY_UNSET", 42usize), 42);
    }

    #[test]
    fn search_limit_is_clamped_to_upstream_range() {
        assert_eq!(clamp_search_limit(0), 1);
        assert_eq!(clamp_search_limit(1), 1);
        assert_eq!(clamp_search_limit(7), 7);
        assert_eq!(clamp_search_limit(10), 10);
        assert_eq!(clamp_search_limit(25), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn log_format_accepts_any_casing_of_json() {
        for raw in ["json", "JSON", "Json", "jSoN"] {
            assert_eq!(LogFormat::parse(Some(raw)), LogFormat::Json, "{raw}");
        }
        assert_eq!(LogFormat::parse(Some("text")), LogFormat::Text);
        assert_eq!(LogFormat::parse(Some("jsonl")), LogFormat::Text);
        assert_eq!(LogFormat::parse(None), LogFormat::Text);
    }

    #[test]
    fn env_or_falls_back_on_missing_key() {
        assert_eq!(env_or("CHAT_RELAY_TEST_SURELY_UNSET", "public"), "public");
    }
}
