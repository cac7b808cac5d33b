use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Activity, ParticipantEmail};

pub mod memory;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Directory of activities and their rosters.
///
/// Activity names are matched exactly. Implementations must make each
/// mutation atomic with respect to other calls on the same instance.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Every activity with its current roster, in directory order
    async fn list_activities(&self) -> Result<Vec<Activity>>;

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// Capacity is not checked. Returns the activity as it stands after the
    /// append.
    async fn signup(&self, activity_name: &str, email: &ParticipantEmail) -> Result<Activity>;

    /// Removes `email` from the roster of `activity_name`
    async fn remove_participant(
        &self,
        activity_name: &str,
        email: &ParticipantEmail,
    ) -> Result<Activity>;
}
