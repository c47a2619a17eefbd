pub mod bet_repo;
pub mod championship_repo;
pub mod match_repo;
pub mod team_repo;
pub mod user_repo;

pub use bet_repo::PgBetStore;
pub use championship_repo::PgChampionshipStore;
pub use match_repo::PgMatchStore;
pub use team_repo::PgTeamStore;
pub use user_repo::PgUserStore;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::store::Stores;

pub async fn init_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Postgres-backed implementations for every store contract.
pub fn pg_stores(pool: PgPool) -> Stores {
    Stores {
        matches: Arc::new(PgMatchStore::new(pool.clone())),
        bets: Arc::new(PgBetStore::new(pool.clone())),
        teams: Arc::new(PgTeamStore::new(pool.clone())),
        championships: Arc::new(PgChampionshipStore::new(pool.clone())),
        users: Arc::new(PgUserStore::new(pool)),
    }
}
