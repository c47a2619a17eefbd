use std::sync::Arc;

use metrics::counter;

use crate::errors::{messages, AppError};
use crate::models::{Match, MatchStatus, Outcome};
use crate::services::locks::MatchLocks;
use crate::store::{MatchStore, UserStore};

/// Recomputes a match's odds from its bet counters and the global registered
/// user count. The whole read-increment-write runs under the match's write
/// lock, so concurrent bets on one match serialize while bets on different
/// matches stay parallel.
#[derive(Clone)]
pub struct OddsEngine {
    matches: Arc<dyn MatchStore>,
    users: Arc<dyn UserStore>,
    locks: MatchLocks,
    base_odds: f64,
}

impl OddsEngine {
    pub fn new(
        matches: Arc<dyn MatchStore>,
        users: Arc<dyn UserStore>,
        locks: MatchLocks,
        base_odds: f64,
    ) -> Self {
        Self {
            matches,
            users,
            locks,
            base_odds,
        }
    }

    /// Fold one placed bet into the match: bump the counters and recompute
    /// the odds of the wagered outcome. The other two outcomes keep their
    /// previous odds until a bet targets them.
    ///
    /// Called after the bet row itself has been durably recorded.
    pub async fn apply_bet(&self, match_id: i64, outcome: Outcome) -> Result<Match, AppError> {
        let lock = self.locks.lock_for(match_id).await;
        let _guard = lock.lock().await;

        let mut m = self
            .matches
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{}{match_id}", messages::MATCH_NOT_FOUND)))?;

        if m.status != MatchStatus::InProgress {
            return Err(AppError::BusinessRule(
                messages::MATCH_NOT_OPEN_FOR_BETTING.into(),
            ));
        }

        m.total_bets += 1;
        *m.counter_mut(outcome) += 1;
        let contrary_bets = m.total_bets - m.counter(outcome);

        // Global count, not match-scoped; a slightly stale value is fine.
        let total_users = self.users.count().await?;

        let odds = compute_odds(contrary_bets, m.total_bets, total_users, self.base_odds);
        m.set_odds(outcome, odds);

        self.matches.save(&m).await?;

        counter!("odds_updates_total").increment(1);
        tracing::debug!(
            match_id,
            outcome = %outcome,
            total_bets = m.total_bets,
            contrary_bets,
            odds,
            "Odds recomputed"
        );

        Ok(m)
    }
}

/// The odds formula. With no bets the base odds stand; otherwise the odds
/// scale with the share of bets placed against the outcome and with the size
/// of the registered user base.
pub fn compute_odds(contrary_bets: i32, total_bets: i32, total_users: i64, base_odds: f64) -> f64 {
    if total_bets == 0 {
        return base_odds;
    }
    (contrary_bets as f64 / total_bets as f64) * total_users as f64 / 100.0 * base_odds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{InMemoryMatchStore, InMemoryUserStore};
    use chrono::Utc;

    #[test]
    fn zero_total_bets_falls_back_to_base() {
        assert_eq!(compute_odds(0, 0, 100, 2.0), 2.0);
    }

    #[test]
    fn worked_example() {
        // 10 bets, 4 on home; an 11th on home makes 5 for and 6 against.
        let odds = compute_odds(6, 11, 100, 2.0);
        assert!((odds - 12.0 / 11.0).abs() < 1e-12);
        assert!((odds - 1.0909).abs() < 1e-3);
    }

    #[test]
    fn formula_is_a_pure_function() {
        let a = compute_odds(3, 7, 250, 2.0);
        let b = compute_odds(3, 7, 250, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn unanimous_betting_drives_odds_to_zero() {
        assert_eq!(compute_odds(0, 5, 100, 2.0), 0.0);
    }

    async fn engine_with_match(status: MatchStatus) -> (OddsEngine, Arc<InMemoryMatchStore>, i64) {
        let matches = Arc::new(InMemoryMatchStore::new());
        let users = Arc::new(InMemoryUserStore::new());
        for i in 0..100 {
            users.add(&format!("user{i}"), &format!("user{i}@example.com")).await;
        }

        let mut m = Match::scheduled(1, 2, 1, Utc::now(), 2.0);
        m.status = status;
        let m = matches.insert(m).await.unwrap();

        let engine = OddsEngine::new(matches.clone(), users, MatchLocks::new(), 2.0);
        (engine, matches, m.id)
    }

    #[tokio::test]
    async fn apply_bet_updates_only_the_wagered_outcome() {
        let (engine, _, id) = engine_with_match(MatchStatus::InProgress).await;

        let m = engine.apply_bet(id, Outcome::HomeWin).await.unwrap();
        assert_eq!(m.total_bets, 1);
        assert_eq!(m.total_bets_home, 1);
        // First bet on home: nothing against it, odds drop to zero.
        assert_eq!(m.odds_home, 0.0);
        // Untouched outcomes keep the base odds.
        assert_eq!(m.odds_draw, 2.0);
        assert_eq!(m.odds_visiting, 2.0);
    }

    #[tokio::test]
    async fn apply_bet_matches_worked_example() {
        let (engine, matches, id) = engine_with_match(MatchStatus::InProgress).await;

        // Pre-load the counters: 10 bets, 4 of them on home.
        let mut m = matches.find_by_id(id).await.unwrap().unwrap();
        m.total_bets = 10;
        m.total_bets_home = 4;
        m.total_bets_draw = 3;
        m.total_bets_visiting = 3;
        matches.save(&m).await.unwrap();

        let updated = engine.apply_bet(id, Outcome::HomeWin).await.unwrap();
        assert_eq!(updated.total_bets, 11);
        assert_eq!(updated.total_bets_home, 5);
        assert!((updated.odds_home - 1.0909).abs() < 1e-3);
    }

    #[tokio::test]
    async fn rejects_match_not_in_progress() {
        let (engine, matches, id) = engine_with_match(MatchStatus::NotStarted).await;

        let err = engine.apply_bet(id, Outcome::Draw).await.unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));

        // Counters and odds untouched.
        let m = matches.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(m.total_bets, 0);
        assert_eq!(m.odds_draw, 2.0);
    }

    #[tokio::test]
    async fn rejects_unknown_match() {
        let (engine, _, _) = engine_with_match(MatchStatus::InProgress).await;
        let err = engine.apply_bet(9999, Outcome::Draw).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
