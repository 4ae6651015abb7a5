//! Router construction.

use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::routes;

/// Builds the application router.
///
/// The router is owned by the caller; nothing is registered globally.
/// Unmatched paths fall through to axum's default 404 and a mismatched
/// method on a registered path gets axum's default 405.
pub fn app_router(config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/api/hello", get(routes::hello))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    if config.cors_origins.is_empty() {
        router
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse::<http::HeaderValue>().ok())
            .collect();
        router.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)))
    }
}
