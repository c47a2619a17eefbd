use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::views::BetView;
use crate::errors::AppError;
use crate::models::Outcome;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetRequest {
    pub user_id: Uuid,
    pub match_id: i64,
    pub predicted_outcome: Outcome,
}

pub async fn place(
    State(state): State<AppState>,
    Json(req): Json<PlaceBetRequest>,
) -> Result<(StatusCode, Json<BetView>), AppError> {
    let view = state
        .bets
        .place_bet(req.user_id, req.match_id, req.predicted_outcome)
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}
