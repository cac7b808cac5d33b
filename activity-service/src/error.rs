use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use signup_shared::models::ValidationError;
use signup_shared::store::StoreError;

/// Error returned by every handler, rendered as `{ "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn bad_request(message: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: String) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: String) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("Request failed with {}", self);
        } else {
            warn!("Request rejected with {}", self);
        }

        let body = Json(serde_json::json!({ "detail": self.message }));
        (self.status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ActivityNotFound(_) => AppError::not_found("Activity not found".into()),
            StoreError::AlreadyRegistered { .. } => AppError::bad_request(
                "Student is already signed up for this activity".into(),
            ),
            StoreError::NotRegistered { .. } => {
                AppError::not_found("Student is not signed up for this activity".into())
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::unprocessable(err.to_string())
    }
}

// An activity segment that cannot be decoded can never name a seeded activity
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::not_found("Activity not found".into())
            }
            other => AppError::new(other.status(), other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::unprocessable(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
