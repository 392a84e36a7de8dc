//! Spotify upstream client: client-credentials token exchange and track
//! search.
//!
//! The proxy never inspects track objects. Search results are copied
//! verbatim from the upstream `tracks.items` array.

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::config::{SpotifyConfig, clamp_search_limit};
use crate::error::RelayError;

/// Subset of the accounts-service token grant the proxy needs.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
}

/// HTTP client for the Spotify accounts service and Web API.
#[derive(Debug, Clone)]
pub struct SpotifyService {
    http: reqwest::Client,
    config: SpotifyConfig,
}

impl SpotifyService {
    /// Builds a client with the configured upstream timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::UpstreamUnavailable`] if the TLS backend
    /// cannot be initialised.
    pub fn new(mut config: SpotifyConfig) -> Result<Self, RelayError> {
        config.search_limit = clamp_search_limit(config.search_limit);
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Exchanges the static client credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the accounts service is unreachable,
    /// answers with a non-success status, or omits `access_token`.
    pub async fn fetch_token(&self) -> Result<String, RelayError> {
        let url = format!("{}/api/token", trim_base(&self.config.accounts_url));
        let response = self
            .http
            .post(url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?;
        let body = ensure_success(response).await?;

        let grant: TokenGrant = serde_json::from_value(body)
            .map_err(|e| RelayError::UpstreamPayload(format!("token grant: {e}")))?;
        tracing::debug!("access token issued");
        Ok(grant.access_token)
    }

    /// Searches tracks matching `query`.
    ///
    /// Uses `token` as bearer credential when given, otherwise obtains a
    /// fresh token first. Returns at most `search_limit` items.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the token exchange or the search fails,
    /// or if the upstream body has no `tracks.items` array.
    pub async fn search_tracks(
        &self,
        query: &str,
        token: Option<&str>,
    ) -> Result<Vec<serde_json::Value>, RelayError> {
        let token = match token {
            Some(t) => t.to_string(),
            None => self.fetch_token().await?,
        };

        let limit = self.config.search_limit.to_string();
        let url = Url::parse_with_params(
            &format!("{}/v1/search", trim_base(&self.config.api_url)),
            [("q", query), ("type", "track"), ("limit", limit.as_str())],
        )
        .map_err(|e| RelayError::Internal(format!("invalid api url: {e}")))?;

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let body = ensure_success(response).await?;

        let items = body
            .pointer("/tracks/items")
            .and_then(|v| v.as_array())
            .ok_or_else(|| RelayError::UpstreamPayload("missing tracks.items".to_string()))?;

        let tracks: Vec<serde_json::Value> = items
            .iter()
            .take(self.config.search_limit)
            .cloned()
            .collect();
        tracing::debug!(query, results = tracks.len(), "track search completed");
        Ok(tracks)
    }
}

fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Turns a non-2xx response into [`RelayError::UpstreamStatus`] and parses
/// a 2xx body as JSON.
async fn ensure_success(response: reqwest::Response) -> Result<serde_json::Value, RelayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RelayError::UpstreamStatus { status, body });
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| RelayError::UpstreamPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_base_strips_trailing_slashes() {
        assert_eq!(trim_base("https://api.spotify.com/"), "https://api.spotify.com");
        assert_eq!(trim_base("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }
}
