pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Bet, Championship, Match, MatchStatus, Team, User};

/// Keyed storage of match records. `insert` assigns the id; `save` overwrites
/// an existing row in full. Callers that read-modify-write a match are
/// expected to hold that match's write lock (see `services::locks`).
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn insert(&self, m: Match) -> anyhow::Result<Match>;
    async fn save(&self, m: &Match) -> anyhow::Result<()>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Match>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Match>>;
    async fn find_by_status(&self, status: MatchStatus) -> anyhow::Result<Vec<Match>>;
}

/// Append-only bet storage. Bets are never updated or deleted.
#[async_trait]
pub trait BetStore: Send + Sync {
    async fn insert(&self, bet: Bet) -> anyhow::Result<Bet>;
    async fn find_by_match(&self, match_id: i64) -> anyhow::Result<Vec<Bet>>;
}

#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>>;
}

#[async_trait]
pub trait ChampionshipStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Championship>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Global registered-user count; feeds the odds formula. A slightly
    /// stale value is acceptable.
    async fn count(&self) -> anyhow::Result<i64>;
}

/// The full set of store handles the service layer is wired with.
#[derive(Clone)]
pub struct Stores {
    pub matches: Arc<dyn MatchStore>,
    pub bets: Arc<dyn BetStore>,
    pub teams: Arc<dyn TeamStore>,
    pub championships: Arc<dyn ChampionshipStore>,
    pub users: Arc<dyn UserStore>,
}
