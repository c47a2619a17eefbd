use metrics::counter;

use crate::api::views::MatchView;
use crate::errors::{messages, AppError};
use crate::models::{Championship, Match, MatchStatus, Team};
use crate::services::conflict::ConflictValidator;
use crate::services::events::EventBus;
use crate::services::locks::MatchLocks;
use crate::store::Stores;
use crate::util;

/// Match creation, queries and score updates.
#[derive(Clone)]
pub struct MatchService {
    stores: Stores,
    validator: ConflictValidator,
    events: EventBus,
    locks: MatchLocks,
    base_odds: f64,
}

impl MatchService {
    pub fn new(
        stores: Stores,
        validator: ConflictValidator,
        events: EventBus,
        locks: MatchLocks,
        base_odds: f64,
    ) -> Self {
        Self {
            stores,
            validator,
            events,
            locks,
            base_odds,
        }
    }

    /// Validation pipeline, short-circuiting on the first failure, in fixed
    /// order: future time, no schedule conflict, distinct teams, then entity
    /// resolution. No side effects before the single insert at the end.
    pub async fn create_match(
        &self,
        home_team_id: i64,
        visiting_team_id: i64,
        championship_id: i64,
        raw_match_time: &str,
    ) -> Result<MatchView, AppError> {
        let match_time = util::parse_match_time(raw_match_time)?;

        if match_time <= chrono::Utc::now() {
            tracing::warn!(%match_time, "Rejected match scheduled in the past");
            return Err(AppError::BusinessRule(messages::INVALID_MATCH_TIME.into()));
        }

        if self
            .validator
            .has_conflict(home_team_id, visiting_team_id, match_time)
            .await?
        {
            tracing::warn!(
                home_team_id,
                visiting_team_id,
                %match_time,
                "Rejected match with scheduling conflict"
            );
            return Err(AppError::Conflict(messages::CONFLICT_MATCH_TIME.into()));
        }

        if home_team_id == visiting_team_id {
            return Err(AppError::BusinessRule(messages::TEAMS_MUST_DIFFER.into()));
        }

        let home = self.resolve_team(home_team_id, messages::HOME_TEAM_NOT_FOUND).await?;
        let visiting = self
            .resolve_team(visiting_team_id, messages::VISITING_TEAM_NOT_FOUND)
            .await?;
        let championship = self.resolve_championship(championship_id).await?;

        let m = Match::scheduled(
            home_team_id,
            visiting_team_id,
            championship_id,
            match_time,
            self.base_odds,
        );
        let m = self.stores.matches.insert(m).await?;

        counter!("matches_created_total").increment(1);
        tracing::info!(match_id = m.id, %match_time, "Match created");

        let view = MatchView::build(&m, &home, &visiting, &championship);
        self.events.publish_match_created(view.clone());

        Ok(view)
    }

    /// Point-in-time snapshot of every match.
    pub async fn find_all(&self) -> Result<Vec<MatchView>, AppError> {
        let mut views = Vec::new();
        for m in self.stores.matches.find_all().await? {
            views.push(self.to_view(&m).await?);
        }
        Ok(views)
    }

    pub async fn find_in_progress(&self) -> Result<Vec<MatchView>, AppError> {
        let mut views = Vec::new();
        for m in self
            .stores
            .matches
            .find_by_status(MatchStatus::InProgress)
            .await?
        {
            views.push(self.to_view(&m).await?);
        }
        Ok(views)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Match, AppError> {
        self.stores
            .matches
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}{id}", messages::MATCH_NOT_FOUND)))
    }

    /// Update the live score. Requires the match to be in progress; takes the
    /// same per-match lock as the odds engine so score writes never race bet
    /// placement on the counters they share a row with.
    pub async fn update_score(
        &self,
        match_id: i64,
        home_score: i32,
        visiting_score: i32,
    ) -> Result<MatchView, AppError> {
        let lock = self.locks.lock_for(match_id).await;
        let _guard = lock.lock().await;

        let mut m = self.find_by_id(match_id).await?;

        if m.status != MatchStatus::InProgress {
            tracing::warn!(match_id, status = %m.status, "Rejected score update");
            return Err(AppError::BusinessRule(messages::CANNOT_UPDATE_SCORE.into()));
        }

        m.home_score = home_score;
        m.visiting_score = visiting_score;
        self.stores.matches.save(&m).await?;

        tracing::info!(match_id, home_score, visiting_score, "Score updated");

        let view = self.to_view(&m).await?;
        self.events.publish_odds_update(view.clone());

        Ok(view)
    }

    /// Resolve team/championship names and build the outward-facing view.
    pub async fn to_view(&self, m: &Match) -> Result<MatchView, AppError> {
        let home = self
            .resolve_team(m.home_team_id, messages::HOME_TEAM_NOT_FOUND)
            .await?;
        let visiting = self
            .resolve_team(m.visiting_team_id, messages::VISITING_TEAM_NOT_FOUND)
            .await?;
        let championship = self.resolve_championship(m.championship_id).await?;

        Ok(MatchView::build(m, &home, &visiting, &championship))
    }

    async fn resolve_team(&self, id: i64, missing_msg: &str) -> Result<Team, AppError> {
        self.stores
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(missing_msg.into()))
    }

    async fn resolve_championship(&self, id: i64) -> Result<Championship, AppError> {
        self.stores
            .championships
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::CHAMPIONSHIP_NOT_FOUND.into()))
    }
}
