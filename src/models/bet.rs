use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Outcome;

/// An immutable record of a placed bet. `odds_at_placement` is the wagered
/// outcome's odds on the match at the moment this row was appended, before
/// the recompute the bet itself triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    pub id: i64,
    pub user_id: Uuid,
    pub match_id: i64,
    pub predicted_outcome: Outcome,
    pub odds_at_placement: f64,
    pub placed_at: DateTime<Utc>,
}
