use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Business-rule violations: invalid match time, identical teams,
    /// betting or score updates on a match that is not in progress.
    #[error("{0}")]
    BusinessRule(String),

    #[error("Unauthorized user. Please log in or verify the access credentials for this resource.")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BusinessRule(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error. Please try again later.".into(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                message,
                timestamp: Utc::now(),
            }),
        )
            .into_response()
    }
}

/// User-facing error messages, kept in one place so services and tests agree.
pub mod messages {
    pub const INVALID_MATCH_TIME: &str =
        "The date of the match has already passed, please provide a future date.";
    pub const INVALID_DATE_FORMAT: &str =
        "Invalid match date format. Match date must be DD/MM/YYYY HH:MM";
    pub const HOME_TEAM_NOT_FOUND: &str = "Home Team not found, or not registered.";
    pub const VISITING_TEAM_NOT_FOUND: &str = "Visiting Team not found, or not registered.";
    pub const CHAMPIONSHIP_NOT_FOUND: &str = "Championship not found, or not registered.";
    pub const USER_NOT_FOUND: &str = "User not found, or not registered.";
    pub const TEAMS_MUST_DIFFER: &str =
        "The home team and the visiting team cannot be the same.";
    pub const CONFLICT_MATCH_TIME: &str =
        "One of the teams in the match already has a game scheduled for this date and time.";
    pub const CANNOT_UPDATE_SCORE: &str = "Cannot update score for match not in progress.";
    pub const MATCH_NOT_OPEN_FOR_BETTING: &str = "Match is not open for betting.";
    pub const MATCH_NOT_FOUND: &str = "Match not found for this id: ";
}
