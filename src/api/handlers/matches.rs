use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::views::MatchView;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub home_team_id: i64,
    pub visiting_team_id: i64,
    pub championship_id: i64,
    /// Kickoff in `dd/MM/yyyy HH:mm`.
    pub match_time: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), AppError> {
    let view = state
        .matches
        .create_match(
            req.home_team_id,
            req.visiting_team_id,
            req.championship_id,
            &req.match_time,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MatchView>>, AppError> {
    Ok(Json(state.matches.find_all().await?))
}

pub async fn in_progress(State(state): State<AppState>) -> Result<Json<Vec<MatchView>>, AppError> {
    Ok(Json(state.matches.find_in_progress().await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdateRequest {
    pub home_score: i32,
    pub visiting_score: i32,
}

pub async fn update_score(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ScoreUpdateRequest>,
) -> Result<Json<MatchView>, AppError> {
    let view = state
        .matches
        .update_score(id, req.home_score, req.visiting_score)
        .await?;

    Ok(Json(view))
}
