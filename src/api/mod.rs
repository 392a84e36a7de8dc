//! REST API layer: proxy handlers, DTOs, and router composition.
//!
//! Proxy endpoints are mounted under `/api`; system endpoints at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete proxy API router.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::spotify::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}
