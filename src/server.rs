//! Router assembly and listener loops for the relay and the proxy.
//!
//! Both listeners share one [`AppState`]. The relay listener only upgrades
//! WebSockets; the proxy listener serves the REST API with static files
//! as fallback.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::handlers::system;
use crate::app_state::AppState;
use crate::ws::handler::ws_handler;

/// Router for the chatbot relay listener.
pub fn relay_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ws_handler))
        .route("/ws", get(ws_handler))
        .merge(system::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the HTTP proxy listener.
pub fn proxy_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(api::build_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the relay on `listener` until the listener fails.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve_relay(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = relay_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}

/// Serves the proxy on `listener` until the listener fails.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve_proxy(
    listener: TcpListener,
    state: AppState,
    static_dir: &Path,
) -> std::io::Result<()> {
    let app = proxy_router(state, static_dir);
    axum::serve(listener, app).await
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::SpotifyConfig;
    use crate::domain::ReplyResolver;
    use crate::service::{RelayService, SpotifyService};

    fn make_state() -> AppState {
        let Ok(spotify) = SpotifyService::new(SpotifyConfig {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            accounts_url: "http://127.0.0.1:1".to_string(),
            api_url: "http://127.0.0.1:1".to_string(),
            search_limit: 10,
            timeout: Duration::from_secs(2),
        }) else {
            panic!("client build failed");
        };
        AppState {
            relay: Arc::new(RelayService::new(Arc::new(ReplyResolver::new()))),
            spotify: Arc::new(spotify),
        }
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("bad request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("router failed");
        };
        response.status()
    }

    #[tokio::test]
    async fn proxy_health_is_ok() {
        let app = proxy_router(make_state(), Path::new("public"));
        assert_eq!(status_of(app, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn search_without_query_is_bad_request() {
        let app = proxy_router(make_state(), Path::new("public"));
        assert_eq!(status_of(app.clone(), "/api/search").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app, "/api/search?query=").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let app = proxy_router(make_state(), Path::new("public"));
        assert_eq!(status_of(app, "/api/token").await, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn missing_static_file_is_not_found() {
        let app = proxy_router(make_state(), Path::new("public"));
        assert_eq!(status_of(app, "/no-such-file.html").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn relay_root_without_upgrade_is_rejected() {
        let app = relay_router(make_state());
        assert!(status_of(app, "/ws").await.is_client_error());
    }
}
