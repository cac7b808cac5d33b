use serde::{Deserialize, Serialize};

mod email;
mod seed;

pub use email::{ParticipantEmail, ValidationError};
pub use seed::seed_activities;

/// A named activity with its capacity and current roster.
///
/// `participants` keeps insertion order; that order is what clients see.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used by the seed table and tests
    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining places, zero once the roster is at or over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Generic `{ "message": ... }` body returned by mutating endpoints
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spots_left_saturates_when_over_capacity() {
        let activity = Activity::new("Tiny Club", "Small", "Never", 1)
            .with_participants(["a@example.com", "b@example.com"]);

        assert_eq!(activity.spots_left(), 0);
        assert!(activity.is_over_capacity());
    }

    #[test]
    fn has_participant_is_exact_match() {
        let activity =
            Activity::new("Chess Club", "Chess", "Fridays", 12).with_participants(["a@example.com"]);

        assert!(activity.has_participant("a@example.com"));
        assert!(!activity.has_participant("A@example.com"));
        assert_eq!(activity.spots_left(), 11);
    }
}
