use serde::{Serialize, Serializer};
use signup_shared::models::{Activity, ParticipantEmail, ValidationError};

// Request DTOs
#[derive(Debug, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// Built from the raw query pairs; a repeated `email` key keeps the last value.
impl From<Vec<(String, String)>> for EmailQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }
}

impl EmailQuery {
    /// A missing parameter is reported the same way as an empty one
    pub fn participant_email(&self) -> Result<ParticipantEmail, ValidationError> {
        ParticipantEmail::parse(self.email.as_deref().unwrap_or_default())
    }
}

// Response DTOs
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ActivityResponse<'a> {
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: u32,
    pub participants: &'a [String],
}

impl<'a> From<&'a Activity> for ActivityResponse<'a> {
    fn from(activity: &'a Activity) -> Self {
        Self {
            description: &activity.description,
            schedule: &activity.schedule,
            max_participants: activity.max_participants,
            participants: &activity.participants,
        }
    }
}

/// `GET /activities` body: a JSON object keyed by activity name.
///
/// Serialized by hand so keys come out in directory order.
#[derive(Debug)]
pub struct ActivitiesResponse(pub Vec<Activity>);

impl Serialize for ActivitiesResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .iter()
                .map(|activity| (activity.name.as_str(), ActivityResponse::from(activity))),
        )
    }
}
