//! HTTP/JSON surface for the habit store.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use crate::state::AppState;

/// Build the full application router.
///
/// When `ui_dir` exists its files are served for unmatched paths; otherwise
/// `/` serves the embedded page.
pub fn build_router(state: AppState, ui_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = routes::api_router();

    match ui_dir {
        Some(dir) if dir.exists() => {
            info!(ui_dir = %dir.display(), "serving static UI files");
            app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
        }
        Some(dir) => {
            info!(ui_dir = %dir.display(), "UI directory not found, serving embedded page");
            app = app.route("/", get(routes::index));
        }
        None => {
            app = app.route("/", get(routes::index));
        }
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
