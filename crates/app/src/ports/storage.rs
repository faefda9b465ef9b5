//! Storage port — repository trait for the activity directory.

use std::future::Future;

use mergington_domain::activity::Activity;
use mergington_domain::error::MergingtonError;

/// Keyed access to the activity directory.
///
/// Activities are identified by name. Implementations must return
/// [`get_all`](Self::get_all) in a stable order (the order activities were
/// first added).
pub trait ActivityRepository {
    /// Fetch an activity by its exact name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send;

    /// Fetch every activity, in directory order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send;

    /// Apply `change` to the stored activity called `name` and return the
    /// result.
    ///
    /// Lookup and change happen under one exclusive hold of the directory, so
    /// concurrent modifications of the same activity never overwrite each
    /// other. When `change` fails its error is returned and the activity must
    /// be left as it was.
    ///
    /// Fails with [`MergingtonError::NotFound`] when no such activity exists;
    /// the directory never gains activities after seeding.
    fn modify<F>(
        &self,
        name: &str,
        change: F,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send
    where
        F: FnOnce(&mut Activity) -> Result<(), MergingtonError> + Send;
}

impl<T: ActivityRepository + Send + Sync> ActivityRepository for std::sync::Arc<T> {
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send {
        (**self).get_by_name(name)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send {
        (**self).get_all()
    }

    fn modify<F>(
        &self,
        name: &str,
        change: F,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send
    where
        F: FnOnce(&mut Activity) -> Result<(), MergingtonError> + Send,
    {
        (**self).modify(name, change)
    }
}
