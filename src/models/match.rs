use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MatchStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a match. `InProgress` is the only state in which bets
/// and score updates are accepted. `Finished` exists for completeness; no
/// current operation produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::NotStarted => "NOT_STARTED",
            MatchStatus::InProgress => "IN_PROGRESS",
            MatchStatus::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(MatchStatus::NotStarted),
            "IN_PROGRESS" => Ok(MatchStatus::InProgress),
            "FINISHED" => Ok(MatchStatus::Finished),
            other => Err(anyhow::anyhow!("unknown match status: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The subject of a bet: which way the match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    HomeWin,
    Draw,
    VisitingWin,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::HomeWin => "HOME_WIN",
            Outcome::Draw => "DRAW",
            Outcome::VisitingWin => "VISITING_WIN",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOME_WIN" => Ok(Outcome::HomeWin),
            "DRAW" => Ok(Outcome::Draw),
            "VISITING_WIN" => Ok(Outcome::VisitingWin),
            other => Err(anyhow::anyhow!("unknown outcome: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// A scheduled match together with its live betting state. Counters and odds
/// are only written through the odds engine / scheduler, which serialize
/// writers per match id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub home_team_id: i64,
    pub visiting_team_id: i64,
    pub championship_id: i64,
    pub match_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_score: i32,
    pub visiting_score: i32,
    pub odds_home: f64,
    pub odds_draw: f64,
    pub odds_visiting: f64,
    pub total_bets: i32,
    pub total_bets_home: i32,
    pub total_bets_draw: i32,
    pub total_bets_visiting: i32,
}

impl Match {
    /// A freshly scheduled match: not started, zero scores and counters,
    /// every outcome at the base odds. The id is assigned by the store.
    pub fn scheduled(
        home_team_id: i64,
        visiting_team_id: i64,
        championship_id: i64,
        match_time: DateTime<Utc>,
        base_odds: f64,
    ) -> Self {
        Self {
            id: 0,
            home_team_id,
            visiting_team_id,
            championship_id,
            match_time,
            status: MatchStatus::NotStarted,
            home_score: 0,
            visiting_score: 0,
            odds_home: base_odds,
            odds_draw: base_odds,
            odds_visiting: base_odds,
            total_bets: 0,
            total_bets_home: 0,
            total_bets_draw: 0,
            total_bets_visiting: 0,
        }
    }

    pub fn involves_team(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.visiting_team_id == team_id
    }

    pub fn counter(&self, outcome: Outcome) -> i32 {
        match outcome {
            Outcome::HomeWin => self.total_bets_home,
            Outcome::Draw => self.total_bets_draw,
            Outcome::VisitingWin => self.total_bets_visiting,
        }
    }

    pub fn counter_mut(&mut self, outcome: Outcome) -> &mut i32 {
        match outcome {
            Outcome::HomeWin => &mut self.total_bets_home,
            Outcome::Draw => &mut self.total_bets_draw,
            Outcome::VisitingWin => &mut self.total_bets_visiting,
        }
    }

    pub fn odds_for(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::HomeWin => self.odds_home,
            Outcome::Draw => self.odds_draw,
            Outcome::VisitingWin => self.odds_visiting,
        }
    }

    pub fn set_odds(&mut self, outcome: Outcome, value: f64) {
        match outcome {
            Outcome::HomeWin => self.odds_home = value,
            Outcome::Draw => self.odds_draw = value,
            Outcome::VisitingWin => self.odds_visiting = value,
        }
    }

    /// Reset the betting window: every outcome back to base odds, all
    /// counters zeroed. Applied when a match is promoted to in-progress.
    pub fn reset_betting_state(&mut self, base_odds: f64) {
        self.odds_home = base_odds;
        self.odds_draw = base_odds;
        self.odds_visiting = base_odds;
        self.total_bets = 0;
        self.total_bets_home = 0;
        self.total_bets_draw = 0;
        self.total_bets_visiting = 0;
    }
}
