//! In-memory store implementations backing the test suites. Row maps live
//! behind async RwLocks; id assignment mirrors the database sequences.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Bet, Championship, Match, MatchStatus, Team, User};

use super::{BetStore, ChampionshipStore, MatchStore, Stores, TeamStore, UserStore};

pub struct InMemoryMatchStore {
    rows: RwLock<HashMap<i64, Match>>,
    next_id: AtomicI64,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn insert(&self, mut m: Match) -> anyhow::Result<Match> {
        m.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.rows.write().await.insert(m.id, m.clone());
        Ok(m)
    }

    async fn save(&self, m: &Match) -> anyhow::Result<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&m.id) {
            anyhow::bail!("match {} does not exist", m.id);
        }
        rows.insert(m.id, m.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Match>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Match>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_status(&self, status: MatchStatus) -> anyhow::Result<Vec<Match>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|m| m.status == status)
            .cloned()
            .collect())
    }
}

pub struct InMemoryBetStore {
    rows: RwLock<Vec<Bet>>,
    next_id: AtomicI64,
}

impl InMemoryBetStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl BetStore for InMemoryBetStore {
    async fn insert(&self, mut bet: Bet) -> anyhow::Result<Bet> {
        bet.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.rows.write().await.push(bet.clone());
        Ok(bet)
    }

    async fn find_by_match(&self, match_id: i64) -> anyhow::Result<Vec<Bet>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|b| b.match_id == match_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryTeamStore {
    rows: RwLock<HashMap<i64, Team>>,
    next_id: AtomicI64,
}

impl InMemoryTeamStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn add(&self, name: &str) -> Team {
        let team = Team {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        };
        self.rows.write().await.insert(team.id, team.clone());
        team
    }
}

#[async_trait]
impl TeamStore for InMemoryTeamStore {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}

pub struct InMemoryChampionshipStore {
    rows: RwLock<HashMap<i64, Championship>>,
    next_id: AtomicI64,
}

impl InMemoryChampionshipStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn add(&self, name: &str) -> Championship {
        let championship = Championship {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        };
        self.rows
            .write()
            .await
            .insert(championship.id, championship.clone());
        championship
    }
}

#[async_trait]
impl ChampionshipStore for InMemoryChampionshipStore {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Championship>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}

pub struct InMemoryUserStore {
    rows: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add(&self, name: &str, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        };
        self.rows.write().await.insert(user.id, user.clone());
        user
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(self.rows.read().await.len() as i64)
    }
}

/// Concrete handles to a fully in-memory store set, for seeding from tests.
#[derive(Clone)]
pub struct MemoryStores {
    pub matches: Arc<InMemoryMatchStore>,
    pub bets: Arc<InMemoryBetStore>,
    pub teams: Arc<InMemoryTeamStore>,
    pub championships: Arc<InMemoryChampionshipStore>,
    pub users: Arc<InMemoryUserStore>,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self {
            matches: Arc::new(InMemoryMatchStore::new()),
            bets: Arc::new(InMemoryBetStore::new()),
            teams: Arc::new(InMemoryTeamStore::new()),
            championships: Arc::new(InMemoryChampionshipStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
        }
    }

    pub fn as_stores(&self) -> Stores {
        Stores {
            matches: self.matches.clone(),
            bets: self.bets.clone(),
            teams: self.teams.clone(),
            championships: self.championships.clone(),
            users: self.users.clone(),
        }
    }
}

impl Default for MemoryStores {
    fn default() -> Self {
        Self::new()
    }
}
