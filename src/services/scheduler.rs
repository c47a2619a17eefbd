use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use tokio::time::{interval, Duration};

use crate::models::MatchStatus;
use crate::services::locks::MatchLocks;
use crate::store::MatchStore;

/// Promotes matches whose kickoff time has passed from NOT_STARTED to
/// IN_PROGRESS. A promoted match starts its betting window clean: odds back
/// to base, counters zeroed.
#[derive(Clone)]
pub struct LifecycleScheduler {
    matches: Arc<dyn MatchStore>,
    locks: MatchLocks,
    base_odds: f64,
}

impl LifecycleScheduler {
    pub fn new(matches: Arc<dyn MatchStore>, locks: MatchLocks, base_odds: f64) -> Self {
        Self {
            matches,
            locks,
            base_odds,
        }
    }

    /// One pass over the due matches. Returns how many were promoted.
    /// Idempotent: matches already in progress, and matches scheduled in the
    /// future, are left untouched.
    pub async fn tick(&self) -> anyhow::Result<u64> {
        let now = Utc::now();
        let due: Vec<_> = self
            .matches
            .find_by_status(MatchStatus::NotStarted)
            .await?
            .into_iter()
            .filter(|m| m.match_time <= now)
            .collect();

        let mut promoted = 0u64;
        for m in due {
            let lock = self.locks.lock_for(m.id).await;
            let _guard = lock.lock().await;

            // Re-read under the lock; a concurrent tick may have won.
            let Some(mut current) = self.matches.find_by_id(m.id).await? else {
                continue;
            };
            if current.status != MatchStatus::NotStarted {
                continue;
            }

            current.status = MatchStatus::InProgress;
            current.reset_betting_state(self.base_odds);
            self.matches.save(&current).await?;

            promoted += 1;
            tracing::info!(match_id = current.id, "Match promoted to IN_PROGRESS");
        }

        if promoted > 0 {
            counter!("matches_opened_total").increment(promoted);
        }

        Ok(promoted)
    }
}

/// Run the scheduler loop, ticking at the configured cadence.
pub async fn run_lifecycle_scheduler(scheduler: LifecycleScheduler, interval_secs: u64) {
    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;

        match scheduler.tick().await {
            Ok(0) => tracing::debug!("Lifecycle tick: no matches due"),
            Ok(n) => tracing::info!(promoted = n, "Lifecycle tick promoted matches"),
            Err(e) => tracing::error!(error = %e, "Lifecycle tick failed"),
        }
    }
}
