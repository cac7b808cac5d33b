use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use log::{debug, info};
use signup_shared::models::MessageResponse;
use signup_shared::store::ActivityStore;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ActivitiesResponse, EmailQuery};

// GET /activities
pub async fn get_activities<S>(State(store): State<Arc<S>>) -> Result<Json<ActivitiesResponse>>
where
    S: ActivityStore,
{
    let activities = store.list_activities().await?;
    debug!("Listing {} activities", activities.len());

    Ok(Json(ActivitiesResponse(activities)))
}

// POST /activities/:name/signup?email=
pub async fn signup_for_activity<S>(
    State(store): State<Arc<S>>,
    activity_name: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>>
where
    S: ActivityStore,
{
    let Path(activity_name) = activity_name?;

    // Validate before touching the directory
    let Query(pairs) = query?;
    let email = EmailQuery::from(pairs).participant_email()?;

    let activity = store.signup(&activity_name, &email).await?;

    info!(
        "Signed up {} for '{}' ({}/{} places taken)",
        email,
        activity_name,
        activity.participants.len(),
        activity.max_participants
    );

    Ok(Json(MessageResponse::new(format!(
        "Signed up {} for {}",
        email, activity_name
    ))))
}

// DELETE /activities/:name/participants?email=
pub async fn remove_participant<S>(
    State(store): State<Arc<S>>,
    activity_name: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>>
where
    S: ActivityStore,
{
    let Path(activity_name) = activity_name?;
    let Query(pairs) = query?;
    let email = EmailQuery::from(pairs).participant_email()?;

    let activity = store.remove_participant(&activity_name, &email).await?;

    info!(
        "Removed {} from '{}' ({} spots left)",
        email,
        activity_name,
        activity.spots_left()
    );

    Ok(Json(MessageResponse::new(format!(
        "Removed {} from {}",
        email, activity_name
    ))))
}
