//! OpenAPI document for the proxy endpoints.

use utoipa::OpenApi;

use crate::api::dto::{TokenResponse, TrackItem};
use crate::api::handlers::{spotify, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description, served by Swagger UI when the
/// `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "chat-relay", description = "Spotify token/search proxy"),
    paths(
        spotify::token_handler,
        spotify::search_handler,
        system::health_handler,
    ),
    components(schemas(
        TokenResponse,
        TrackItem,
        system::HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Spotify", description = "Token issue and track search"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
