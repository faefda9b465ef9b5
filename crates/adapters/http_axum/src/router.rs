//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use mergington_app::ports::ActivityRepository;

use crate::state::AppState;

/// Path the root URL redirects to.
pub const INDEX_PAGE: &str = "/static/index.html";

/// Build the top-level axum [`Router`].
///
/// Mounts the activities API at the root and a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR>(state: AppState<AR>) -> Router
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve files from `dir` under `/static` and redirect `/` to the index page.
pub fn with_static_assets(router: Router, dir: impl AsRef<Path>) -> Router {
    router
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .nest_service("/static", ServeDir::new(dir))
}

async fn health_check() -> &'static str {
    "OK"
}
