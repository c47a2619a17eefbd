use std::time::Instant;

use chrono::Utc;
use metrics::{counter, histogram};
use uuid::Uuid;

use crate::api::views::BetView;
use crate::errors::{messages, AppError};
use crate::models::{Bet, MatchStatus, Outcome};
use crate::services::events::EventBus;
use crate::services::matches::MatchService;
use crate::services::odds::OddsEngine;
use crate::store::Stores;

/// Records bets and drives the resulting odds update.
#[derive(Clone)]
pub struct BetService {
    stores: Stores,
    odds: OddsEngine,
    matches: MatchService,
    events: EventBus,
}

impl BetService {
    pub fn new(stores: Stores, odds: OddsEngine, matches: MatchService, events: EventBus) -> Self {
        Self {
            stores,
            odds,
            matches,
            events,
        }
    }

    /// Place a bet: resolve the user, fast-fail on a match that is not open,
    /// append the immutable bet row, then fold it into the match odds.
    ///
    /// The open check here is advisory; the authoritative one runs inside
    /// the odds engine under the match lock. Once the bet row is written
    /// there is no rollback: an odds failure after that point surfaces to
    /// the caller with the bet already recorded.
    pub async fn place_bet(
        &self,
        user_id: Uuid,
        match_id: i64,
        predicted_outcome: Outcome,
    ) -> Result<BetView, AppError> {
        let start = Instant::now();

        let user = self
            .stores
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::USER_NOT_FOUND.into()))?;

        let m = self.matches.find_by_id(match_id).await?;
        if m.status != MatchStatus::InProgress {
            return Err(AppError::BusinessRule(
                messages::MATCH_NOT_OPEN_FOR_BETTING.into(),
            ));
        }

        let bet = Bet {
            id: 0,
            user_id: user.id,
            match_id,
            predicted_outcome,
            odds_at_placement: m.odds_for(predicted_outcome),
            placed_at: Utc::now(),
        };
        let bet = self.stores.bets.insert(bet).await?;

        let updated = self.odds.apply_bet(match_id, predicted_outcome).await?;

        counter!("bets_placed_total").increment(1);
        histogram!("bet_placement_latency_seconds").record(start.elapsed().as_secs_f64());
        tracing::info!(
            bet_id = bet.id,
            match_id,
            user_id = %user.id,
            outcome = %predicted_outcome,
            "Bet placed"
        );

        let view = self.matches.to_view(&updated).await?;
        self.events.publish_odds_update(view);

        Ok(BetView::build(&bet))
    }
}
