use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    /// Initial odds for every outcome, and the fallback when no bets exist.
    pub base_odds: f64,
    /// Half-width of the scheduling-conflict window around a candidate time.
    pub conflict_window_hours: i64,
    /// Cadence of the lifecycle scheduler tick.
    pub scheduler_interval_secs: u64,
    /// Per-channel broadcast buffer; lagging subscribers lose the oldest events.
    pub event_buffer_size: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            base_odds: env::var("BASE_ODDS")
                .unwrap_or_else(|_| "2.0".into())
                .parse()
                .unwrap_or(2.0),
            conflict_window_hours: env::var("CONFLICT_WINDOW_HOURS")
                .unwrap_or_else(|_| "3".into())
                .parse()
                .unwrap_or(3),
            scheduler_interval_secs: env::var("SCHEDULER_INTERVAL_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .unwrap_or(60),
            event_buffer_size: env::var("EVENT_BUFFER_SIZE")
                .unwrap_or_else(|_| "256".into())
                .parse()
                .unwrap_or(256),
        })
    }
}
