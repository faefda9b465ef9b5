//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod activities;

use axum::Router;
use axum::routing::{delete, get, post};

use mergington_app::ports::ActivityRepository;

use crate::state::AppState;

/// Build the activities sub-router.
pub fn routes<AR>() -> Router<AppState<AR>>
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/activities", get(activities::list::<AR>))
        .route("/activities/{name}/signup", post(activities::sign_up::<AR>))
        .route(
            "/activities/{name}/participants/{email}",
            delete(activities::unregister::<AR>),
        )
}
