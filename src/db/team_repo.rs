use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Team;
use crate::store::TeamStore;

pub struct PgTeamStore {
    pool: PgPool,
}

impl PgTeamStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamStore for PgTeamStore {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>> {
        let row = sqlx::query_as::<_, Team>("SELECT id, name FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }
}
