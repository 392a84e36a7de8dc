//! Spotify proxy handlers: token issue and track search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{SearchParams, TokenResponse, TrackItem};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, RelayError};

/// `GET /api/token` — Issue an access token using the server's credentials.
///
/// # Errors
///
/// Returns [`RelayError`] if the accounts service call fails.
#[utoipa::path(
    get,
    path = "/api/token",
    tag = "Spotify",
    summary = "Issue an access token",
    description = "Performs a client-credentials exchange with the accounts service using the server's static credentials.",
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 502, description = "Upstream failure", body = ErrorResponse),
    )
)]
pub async fn token_handler(State(state): State<AppState>) -> Result<impl IntoResponse, RelayError> {
    let access_token = state.spotify.fetch_token().await?;
    Ok(Json(TokenResponse { access_token }))
}

/// `GET /api/search` — Search tracks and return the upstream items.
///
/// # Errors
///
/// Returns [`RelayError::InvalidRequest`] without a `query`, or an upstream
/// error if the search fails.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "Spotify",
    summary = "Search tracks",
    description = "Forwards the query to the track search API and returns at most ten items of `tracks.items` verbatim.",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching tracks", body = Vec<TrackItem>),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 502, description = "Upstream failure", body = ErrorResponse),
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, RelayError> {
    let query = params
        .query()
        .ok_or_else(|| RelayError::InvalidRequest("missing query".to_string()))?;

    let items = state.spotify.search_tracks(query, params.token()).await?;
    let tracks: Vec<TrackItem> = items.into_iter().map(TrackItem).collect();
    Ok(Json(tracks))
}

/// Proxy routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/token", get(token_handler))
        .route("/search", get(search_handler))
}
