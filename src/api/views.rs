use serde::Serialize;

use crate::models::{Bet, Championship, Match, MatchStatus, Outcome, Team};
use crate::util;

/// Outward-facing match snapshot: ids resolved to names, the kickoff time in
/// the wire format. Also the payload of both live event streams.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub match_id: i64,
    pub home_team_name: String,
    pub visiting_team_name: String,
    pub championship_name: String,
    pub match_time: String,
    pub home_score: i32,
    pub visiting_score: i32,
    pub odds_home: f64,
    pub odds_draw: f64,
    pub odds_visiting: f64,
    #[serde(rename = "outcome")]
    pub status: MatchStatus,
}

impl MatchView {
    pub fn build(m: &Match, home: &Team, visiting: &Team, championship: &Championship) -> Self {
        Self {
            match_id: m.id,
            home_team_name: home.name.clone(),
            visiting_team_name: visiting.name.clone(),
            championship_name: championship.name.clone(),
            match_time: util::format_match_time(m.match_time),
            home_score: m.home_score,
            visiting_score: m.visiting_score,
            odds_home: m.odds_home,
            odds_draw: m.odds_draw,
            odds_visiting: m.odds_visiting,
            status: m.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetView {
    pub bet_id: i64,
    pub match_id: i64,
    pub predicted_outcome: Outcome,
    /// The wagered outcome's odds at the moment the bet was recorded.
    pub odds: f64,
}

impl BetView {
    pub fn build(bet: &Bet) -> Self {
        Self {
            bet_id: bet.id,
            match_id: bet.match_id,
            predicted_outcome: bet.predicted_outcome,
            odds: bet.odds_at_placement,
        }
    }
}
