use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Championship;
use crate::store::ChampionshipStore;

pub struct PgChampionshipStore {
    pool: PgPool,
}

impl PgChampionshipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChampionshipStore for PgChampionshipStore {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Championship>> {
        let row =
            sqlx::query_as::<_, Championship>("SELECT id, name FROM championships WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }
}
