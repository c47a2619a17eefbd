use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{Bet, Outcome};
use crate::store::BetStore;

#[derive(Debug, FromRow)]
struct BetRow {
    id: i64,
    user_id: Uuid,
    match_id: i64,
    predicted_outcome: String,
    odds_at_placement: f64,
    placed_at: DateTime<Utc>,
}

impl TryFrom<BetRow> for Bet {
    type Error = anyhow::Error;

    fn try_from(row: BetRow) -> Result<Self, Self::Error> {
        Ok(Bet {
            id: row.id,
            user_id: row.user_id,
            match_id: row.match_id,
            predicted_outcome: Outcome::from_str(&row.predicted_outcome)?,
            odds_at_placement: row.odds_at_placement,
            placed_at: row.placed_at,
        })
    }
}

pub struct PgBetStore {
    pool: PgPool,
}

impl PgBetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BetStore for PgBetStore {
    async fn insert(&self, bet: Bet) -> anyhow::Result<Bet> {
        let row = sqlx::query_as::<_, BetRow>(
            r#"
            INSERT INTO bets (user_id, match_id, predicted_outcome, odds_at_placement, placed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(bet.user_id)
        .bind(bet.match_id)
        .bind(bet.predicted_outcome.as_str())
        .bind(bet.odds_at_placement)
        .bind(bet.placed_at)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_by_match(&self, match_id: i64) -> anyhow::Result<Vec<Bet>> {
        let rows =
            sqlx::query_as::<_, BetRow>("SELECT * FROM bets WHERE match_id = $1 ORDER BY id")
                .bind(match_id)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Bet::try_from).collect()
    }
}
