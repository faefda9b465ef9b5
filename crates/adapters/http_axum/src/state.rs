//! Shared application state for axum handlers.

use std::sync::Arc;

use mergington_app::ports::ActivityRepository;
use mergington_app::services::activity_service::ActivityService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<AR> {
    /// Activity directory service.
    pub activity_service: Arc<ActivityService<AR>>,
}

impl<AR> Clone for AppState<AR> {
    fn clone(&self) -> Self {
        Self {
            activity_service: Arc::clone(&self.activity_service),
        }
    }
}

impl<AR> AppState<AR>
where
    AR: ActivityRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(activity_service: ActivityService<AR>) -> Self {
        Self {
            activity_service: Arc::new(activity_service),
        }
    }
}
