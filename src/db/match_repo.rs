use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::models::{Match, MatchStatus};
use crate::store::MatchStore;

/// Database row for the matches table. Status is stored as text and parsed
/// into the domain enum on the way out.
#[derive(Debug, FromRow)]
struct MatchRow {
    id: i64,
    home_team_id: i64,
    visiting_team_id: i64,
    championship_id: i64,
    match_time: DateTime<Utc>,
    status: String,
    home_score: i32,
    visiting_score: i32,
    odds_home: f64,
    odds_draw: f64,
    odds_visiting: f64,
    total_bets: i32,
    total_bets_home: i32,
    total_bets_draw: i32,
    total_bets_visiting: i32,
}

impl TryFrom<MatchRow> for Match {
    type Error = anyhow::Error;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        Ok(Match {
            id: row.id,
            home_team_id: row.home_team_id,
            visiting_team_id: row.visiting_team_id,
            championship_id: row.championship_id,
            match_time: row.match_time,
            status: MatchStatus::from_str(&row.status)?,
            home_score: row.home_score,
            visiting_score: row.visiting_score,
            odds_home: row.odds_home,
            odds_draw: row.odds_draw,
            odds_visiting: row.odds_visiting,
            total_bets: row.total_bets,
            total_bets_home: row.total_bets_home,
            total_bets_draw: row.total_bets_draw,
            total_bets_visiting: row.total_bets_visiting,
        })
    }
}

pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn insert(&self, m: Match) -> anyhow::Result<Match> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            INSERT INTO matches (
                home_team_id, visiting_team_id, championship_id, match_time,
                status, home_score, visiting_score,
                odds_home, odds_draw, odds_visiting,
                total_bets, total_bets_home, total_bets_draw, total_bets_visiting
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(m.home_team_id)
        .bind(m.visiting_team_id)
        .bind(m.championship_id)
        .bind(m.match_time)
        .bind(m.status.as_str())
        .bind(m.home_score)
        .bind(m.visiting_score)
        .bind(m.odds_home)
        .bind(m.odds_draw)
        .bind(m.odds_visiting)
        .bind(m.total_bets)
        .bind(m.total_bets_home)
        .bind(m.total_bets_draw)
        .bind(m.total_bets_visiting)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn save(&self, m: &Match) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE matches
            SET status = $2, home_score = $3, visiting_score = $4,
                odds_home = $5, odds_draw = $6, odds_visiting = $7,
                total_bets = $8, total_bets_home = $9,
                total_bets_draw = $10, total_bets_visiting = $11
            WHERE id = $1
            "#,
        )
        .bind(m.id)
        .bind(m.status.as_str())
        .bind(m.home_score)
        .bind(m.visiting_score)
        .bind(m.odds_home)
        .bind(m.odds_draw)
        .bind(m.odds_visiting)
        .bind(m.total_bets)
        .bind(m.total_bets_home)
        .bind(m.total_bets_draw)
        .bind(m.total_bets_visiting)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>("SELECT * FROM matches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Match::try_from).transpose()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Match>> {
        let rows = sqlx::query_as::<_, MatchRow>("SELECT * FROM matches ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Match::try_from).collect()
    }

    async fn find_by_status(&self, status: MatchStatus) -> anyhow::Result<Vec<Match>> {
        let rows =
            sqlx::query_as::<_, MatchRow>("SELECT * FROM matches WHERE status = $1 ORDER BY id")
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Match::try_from).collect()
    }
}
