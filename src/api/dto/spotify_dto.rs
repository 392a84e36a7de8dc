//! Spotify proxy DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Response body for `GET /api/token`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Bearer token issued by the accounts service.
    pub access_token: String,
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text search query.
    #[serde(default)]
    pub query: Option<String>,
    /// Bearer token from `/api/token`. When absent the proxy fetches one.
    #[serde(default)]
    pub token: Option<String>,
}

impl SearchParams {
    /// Returns the non-empty query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Returns the non-empty token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// One upstream track object, passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TrackItem(pub serde_json::Value);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_missing() {
        let params = SearchParams {
            query: Some(String::new()),
            token: Some(String::new()),
        };
        assert!(params.query().is_none());
        assert!(params.token().is_none());
    }

    #[test]
    fn track_item_serializes_verbatim() {
        let raw = serde_json::json!({"id": "abc", "name": "Song", "artists": [{"name": "X"}]});
        let item = TrackItem(raw.clone());
        let Ok(json) = serde_json::to_value(&item) else {
            panic!("serialization failed");
        };
        assert_eq!(json, raw);
    }
}
