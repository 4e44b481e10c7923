//! Local HTTP surface: the front-end shell plus a minimal route layer.

use axum::{routing::post, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod handlers;

/// Builds the application router. Unmatched requests fall through to the
/// static shell, with `index.html` as the single-page fallback.
pub fn create_router(static_dir: &str) -> Router {
    let index = format!("{}/index.html", static_dir);
    let shell = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/test", post(handlers::test))
        .route("/createUser", post(handlers::create_user))
        .route("/login", post(handlers::login))
        .fallback_service(shell)
        .layer(TraceLayer::new_for_http())
}
