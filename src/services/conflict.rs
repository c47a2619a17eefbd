use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::store::MatchStore;

/// Detects scheduling collisions: a candidate match conflicts with any stored
/// match that involves either candidate team and whose kickoff falls within
/// the window around the candidate time, boundaries inclusive.
///
/// A full scan over all matches; no index. Read-only.
#[derive(Clone)]
pub struct ConflictValidator {
    matches: Arc<dyn MatchStore>,
    window: Duration,
}

impl ConflictValidator {
    pub fn new(matches: Arc<dyn MatchStore>, window_hours: i64) -> Self {
        Self {
            matches,
            window: Duration::hours(window_hours),
        }
    }

    pub async fn has_conflict(
        &self,
        home_team_id: i64,
        visiting_team_id: i64,
        candidate_time: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let window_start = candidate_time - self.window;
        let window_end = candidate_time + self.window;

        let conflict = self.matches.find_all().await?.iter().any(|m| {
            let involved = m.involves_team(home_team_id) || m.involves_team(visiting_team_id);
            involved && m.match_time >= window_start && m.match_time <= window_end
        });

        Ok(conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Match;
    use crate::store::memory::InMemoryMatchStore;

    async fn store_with_match(
        home: i64,
        visiting: i64,
        time: DateTime<Utc>,
    ) -> Arc<InMemoryMatchStore> {
        let store = Arc::new(InMemoryMatchStore::new());
        store
            .insert(Match::scheduled(home, visiting, 1, time, 2.0))
            .await
            .unwrap();
        store
    }

    fn t(raw: &str) -> DateTime<Utc> {
        crate::util::parse_match_time(raw).unwrap()
    }

    #[tokio::test]
    async fn conflicts_when_shared_team_inside_window() {
        let store = store_with_match(1, 2, t("10/10/2026 15:00")).await;
        let validator = ConflictValidator::new(store, 3);

        // Team 1 appears as home in the stored match, visiting in the candidate.
        assert!(validator
            .has_conflict(3, 1, t("10/10/2026 16:30"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn window_boundaries_are_inclusive() {
        let store = store_with_match(1, 2, t("10/10/2026 15:00")).await;
        let validator = ConflictValidator::new(store, 3);

        // Candidate at exactly +3h: the stored match sits on the window edge.
        assert!(validator
            .has_conflict(1, 3, t("10/10/2026 18:00"))
            .await
            .unwrap());
        assert!(validator
            .has_conflict(1, 3, t("10/10/2026 12:00"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn one_minute_past_the_window_is_free() {
        let store = store_with_match(1, 2, t("10/10/2026 15:00")).await;
        let validator = ConflictValidator::new(store, 3);

        assert!(!validator
            .has_conflict(1, 3, t("10/10/2026 18:01"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn unrelated_teams_never_conflict() {
        let store = store_with_match(1, 2, t("10/10/2026 15:00")).await;
        let validator = ConflictValidator::new(store, 3);

        assert!(!validator
            .has_conflict(3, 4, t("10/10/2026 15:00"))
            .await
            .unwrap());
    }
}
