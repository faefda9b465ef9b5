//! In-memory implementation of [`ActivityRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use mergington_app::ports::ActivityRepository;
use mergington_domain::activity::Activity;
use mergington_domain::error::{MergingtonError, NotFoundError};
use mergington_domain::seed;

/// Activity directory held in process memory.
///
/// Reads share the lock; `modify` holds it exclusively for the whole
/// check-then-change. Activities keep the order in which they were supplied.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    table: RwLock<Vec<Activity>>,
}

impl InMemoryActivityRepository {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding `activities`.
    ///
    /// Later entries whose name repeats an earlier one are dropped so that
    /// names stay unique.
    #[must_use]
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut table: Vec<Activity> = Vec::new();
        for activity in activities {
            if table.iter().any(|existing| existing.name == activity.name) {
                tracing::warn!(activity = %activity.name, "skipping duplicate activity name");
                continue;
            }
            table.push(activity);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// Create a directory holding the fixed seed table.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_activities(seed::activities())
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Activity>, MergingtonError>> + Send {
        async move {
            let table = self.table.read().await;
            Ok(table.iter().find(|a| a.name == name).cloned())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Activity>, MergingtonError>> + Send {
        async move { Ok(self.table.read().await.clone()) }
    }

    fn modify<F>(
        &self,
        name: &str,
        change: F,
    ) -> impl Future<Output = Result<Activity, MergingtonError>> + Send
    where
        F: FnOnce(&mut Activity) -> Result<(), MergingtonError> + Send,
    {
        async move {
            let mut table = self.table.write().await;
            let Some(slot) = table.iter_mut().find(|a| a.name == name) else {
                return Err(NotFoundError {
                    name: name.to_string(),
                }
                .into());
            };
            change(&mut *slot)?;
            Ok(slot.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use mergington_app::services::activity_service::ActivityService;
    use mergington_domain::error::ConflictError;

    fn activity(name: &str) -> Activity {
        Activity::builder()
            .name(name)
            .description("desc")
            .schedule("Mondays")
            .max_participants(10)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_start_empty_when_created_with_new() {
        let repo = InMemoryActivityRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_seed_table_in_order() {
        let repo = InMemoryActivityRepository::seeded();
        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names.first(), Some(&"Chess Club"));
        assert_eq!(names.last(), Some(&"Science Olympiad"));
    }

    #[tokio::test]
    async fn should_get_activity_by_exact_name() {
        let repo = InMemoryActivityRepository::seeded();
        let chess = repo.get_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(chess.max_participants, 12);

        assert!(repo.get_by_name("chess club").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_drop_duplicate_names_on_construction() {
        let mut second = activity("Chess Club");
        second.max_participants = 99;
        let repo = InMemoryActivityRepository::with_activities([activity("Chess Club"), second]);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].max_participants, 10);
    }

    #[tokio::test]
    async fn should_change_roster_in_place_on_modify() {
        let repo = InMemoryActivityRepository::with_activities([activity("Choir")]);

        let returned = repo
            .modify("Choir", |choir| choir.sign_up("ava@mergington.edu"))
            .await
            .unwrap();
        assert_eq!(returned.participants, vec!["ava@mergington.edu"]);

        let stored = repo.get_by_name("Choir").await.unwrap().unwrap();
        assert_eq!(stored, returned);
    }

    #[tokio::test]
    async fn should_keep_activity_when_change_fails() {
        let repo = InMemoryActivityRepository::seeded();

        let result = repo
            .modify("Chess Club", |chess| chess.sign_up("michael@mergington.edu"))
            .await;
        assert!(matches!(
            result,
            Err(MergingtonError::Conflict(ConflictError::AlreadySignedUp { .. }))
        ));

        let chess = repo.get_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(chess.participants.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_modifying_unknown_activity() {
        let repo = InMemoryActivityRepository::new();
        let result = repo
            .modify("Choir", |choir| choir.sign_up("ava@mergington.edu"))
            .await;
        assert!(matches!(result, Err(MergingtonError::NotFound(_))));
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn should_keep_every_acknowledged_sign_up_under_concurrency() {
        let svc = Arc::new(ActivityService::new(InMemoryActivityRepository::seeded()));

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move {
                    let email = format!("student{i}@mergington.edu");
                    svc.sign_up("Chess Club", &email).await
                })
            })
            .collect();

        let mut acknowledged = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                acknowledged += 1;
            }
        }

        let chess = svc.get_activity("Chess Club").await.unwrap();
        assert_eq!(acknowledged, 200);
        assert_eq!(chess.participants.len(), 202);
        for i in 0..200 {
            assert!(chess.is_signed_up(&format!("student{i}@mergington.edu")));
        }
    }
}
