//! Activity service — use-cases for browsing activities and managing rosters.

use mergington_domain::activity::Activity;
use mergington_domain::error::{MergingtonError, NotFoundError};

use crate::ports::ActivityRepository;

/// Application service for the activity directory.
pub struct ActivityService<R> {
    repo: R,
}

impl<R: ActivityRepository> ActivityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every activity with its current roster, in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, MergingtonError> {
        let activities = self.repo.get_all().await?;
        tracing::debug!(count = activities.len(), "listed activities");
        Ok(activities)
    }

    /// Look up an activity by name, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] when no activity is called `name`.
    pub async fn get_activity(&self, name: &str) -> Result<Activity, MergingtonError> {
        self.repo.get_by_name(name).await?.ok_or_else(|| {
            NotFoundError {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Add `email` to the roster of the activity called `name`.
    ///
    /// The roster check and the append happen in one repository call, so
    /// concurrent sign-ups never drop each other. Capacity is not checked.
    /// Returns the activity with its updated roster.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] for an unknown activity,
    /// [`MergingtonError::Conflict`] when the email is already signed up,
    /// and [`MergingtonError::Validation`] for a blank email.
    pub async fn sign_up(&self, name: &str, email: &str) -> Result<Activity, MergingtonError> {
        let result = self
            .repo
            .modify(name, |activity| activity.sign_up(email))
            .await;
        match &result {
            Ok(_) => tracing::info!(activity = name, email, "participant signed up"),
            Err(err) => {
                tracing::warn!(activity = name, email, error = %err, "sign up rejected");
            }
        }
        result
    }

    /// Remove `email` from the roster of the activity called `name`.
    ///
    /// Returns the activity with its updated roster.
    ///
    /// # Errors
    ///
    /// Returns [`MergingtonError::NotFound`] for an unknown activity,
    /// [`MergingtonError::Conflict`] when the email is not on the roster,
    /// and [`MergingtonError::Validation`] for a blank email.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<Activity, MergingtonError> {
        let result = self
            .repo
            .modify(name, |activity| activity.unregister(email))
            .await;
        match &result {
            Ok(_) => tracing::info!(activity = name, email, "participant unregistered"),
            Err(err) => {
                tracing::warn!(activity = name, email, error = %err, "unregister rejected");
            }
        }
        result
    }
}
