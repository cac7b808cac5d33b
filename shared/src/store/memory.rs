use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::models::{seed_activities, Activity, ParticipantEmail};
use crate::store::{ActivityStore, Result, StoreError};

/// In-memory activity directory.
///
/// The whole table sits behind one lock; signup and removal hold the write
/// lock across lookup, check and mutation.
#[derive(Debug)]
pub struct InMemoryActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityStore {
    /// Directory populated from the fixed seed table
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn with_activities(activities: Vec<Activity>) -> Self {
        debug!(
            "Creating in-memory activity store with {} activities",
            activities.len()
        );
        Self {
            activities: RwLock::new(activities),
        }
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn find_activity<'a>(activities: &'a mut [Activity], name: &str) -> Result<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or_else(|| StoreError::ActivityNotFound(name.to_string()))
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn list_activities(&self) -> Result<Vec<Activity>> {
        let activities = self.activities.read().await;
        Ok(activities.clone())
    }

    async fn signup(&self, activity_name: &str, email: &ParticipantEmail) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let activity = find_activity(&mut activities, activity_name)?;

        if activity.has_participant(email.as_str()) {
            return Err(StoreError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());

        if activity.is_over_capacity() {
            warn!(
                "Activity '{}' is over capacity: {} participants, max {}",
                activity.name,
                activity.participants.len(),
                activity.max_participants
            );
        }

        info!("Added {} to activity '{}'", email, activity_name);
        Ok(activity.clone())
    }

    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &ParticipantEmail,
    ) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let activity = find_activity(&mut activities, activity_name)?;

        let index = activity
            .participants
            .iter()
            .position(|p| p == email.as_str())
            .ok_or_else(|| StoreError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(index);

        info!("Removed {} from activity '{}'", email, activity_name);
        Ok(activity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn email(raw: &str) -> ParticipantEmail {
        ParticipantEmail::parse(raw).unwrap()
    }

    async fn participants_of(store: &InMemoryActivityStore, name: &str) -> Vec<String> {
        store
            .list_activities()
            .await
            .unwrap()
            .into_iter()
            .find(|a| a.name == name)
            .map(|a| a.participants)
            .unwrap()
    }

    #[tokio::test]
    async fn seeded_store_lists_every_seed_activity_in_order() {
        let store = InMemoryActivityStore::seeded();
        let listed: Vec<_> = store
            .list_activities()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        let seeded: Vec<_> = seed_activities().into_iter().map(|a| a.name).collect();

        assert_eq!(listed, seeded);
        assert!(listed.iter().any(|n| n == "Chess Club"));
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let store = InMemoryActivityStore::seeded();

        store.signup("Chess Club", &email("a@example.com")).await.unwrap();
        let updated = store.signup("Chess Club", &email("b@example.com")).await.unwrap();

        assert_eq!(
            updated.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "a@example.com",
                "b@example.com"
            ]
        );
        assert_eq!(participants_of(&store, "Chess Club").await, updated.participants);
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_without_duplicate_entry() {
        let store = InMemoryActivityStore::seeded();
        let a = email("a@example.com");

        store.signup("Chess Club", &a).await.unwrap();
        let err = store.signup("Chess Club", &a).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::AlreadyRegistered {
                activity: "Chess Club".into(),
                email: "a@example.com".into()
            }
        );
        let roster = participants_of(&store, "Chess Club").await;
        assert_eq!(roster.iter().filter(|p| *p == "a@example.com").count(), 1);
    }

    #[tokio::test]
    async fn signup_then_remove_restores_roster() {
        let store = InMemoryActivityStore::seeded();
        let before = participants_of(&store, "Gym Class").await;
        let a = email("a@example.com");

        store.signup("Gym Class", &a).await.unwrap();
        store.remove_participant("Gym Class", &a).await.unwrap();

        assert_eq!(participants_of(&store, "Gym Class").await, before);
    }

    #[tokio::test]
    async fn removing_absent_email_leaves_roster_unchanged() {
        let store = InMemoryActivityStore::seeded();
        let before = participants_of(&store, "Chess Club").await;

        let err = store
            .remove_participant("Chess Club", &email("ghost@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotRegistered { .. }));
        assert_eq!(participants_of(&store, "Chess Club").await, before);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found_for_both_operations() {
        let store = InMemoryActivityStore::seeded();
        let before = store.list_activities().await.unwrap();
        let a = email("someone@example.com");

        assert_eq!(
            store.signup("Nonexistent", &a).await.unwrap_err(),
            StoreError::ActivityNotFound("Nonexistent".into())
        );
        assert_eq!(
            store.remove_participant("Nonexistent", &a).await.unwrap_err(),
            StoreError::ActivityNotFound("Nonexistent".into())
        );
        assert_eq!(store.list_activities().await.unwrap(), before);
    }

    #[tokio::test]
    async fn activity_names_are_case_sensitive() {
        let store = InMemoryActivityStore::seeded();

        let err = store
            .signup("chess club", &email("a@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::ActivityNotFound(_)));
    }

    #[tokio::test]
    async fn signup_is_allowed_beyond_capacity() {
        let store = InMemoryActivityStore::with_activities(vec![Activity::new(
            "Tiny Club",
            "One seat only",
            "Never",
            1,
        )
        .with_participants(["first@example.com"])]);

        let updated = store
            .signup("Tiny Club", &email("second@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.participants.len(), 2);
        assert!(updated.is_over_capacity());
    }

    #[tokio::test]
    async fn instances_do_not_share_state() {
        let first = InMemoryActivityStore::seeded();
        let second = InMemoryActivityStore::seeded();

        first.signup("Chess Club", &email("a@example.com")).await.unwrap();

        assert!(!participants_of(&second, "Chess Club")
            .await
            .contains(&"a@example.com".to_string()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_signups_are_not_lost() {
        let store = Arc::new(InMemoryActivityStore::with_activities(vec![Activity::new(
            "Open Hall",
            "Everyone welcome",
            "Always",
            100,
        )]));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .signup("Open Hall", &email(&format!("student{i}@example.com")))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(participants_of(&store, "Open Hall").await.len(), 50);
    }
}
