use chrono::{Duration, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;

use matchbook::config::AppConfig;
use matchbook::models::{Championship, Match, MatchStatus, Team, User};
use matchbook::store::memory::MemoryStores;
use matchbook::store::MatchStore;
use matchbook::util::format_match_time;
use matchbook::AppState;

/// App wired over in-memory stores, plus concrete handles for seeding.
pub struct TestApp {
    pub state: AppState,
    pub stores: MemoryStores,
}

#[allow(dead_code)]
pub fn build_test_app() -> TestApp {
    let config = AppConfig {
        database_url: "unused://in-memory".into(),
        host: "127.0.0.1".into(),
        port: 0,
        base_odds: 2.0,
        conflict_window_hours: 3,
        scheduler_interval_secs: 60,
        event_buffer_size: 64,
    };

    let stores = MemoryStores::new();
    // A detached recorder: handlers can render it, nothing global is installed.
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::build(config, stores.as_stores(), metrics_handle);

    TestApp { state, stores }
}

/// Two teams and a championship, enough for one match.
#[allow(dead_code)]
pub async fn seed_reference_data(app: &TestApp) -> (Team, Team, Championship) {
    let home = app.stores.teams.add("Crimson FC").await;
    let visiting = app.stores.teams.add("Harbor United").await;
    let championship = app.stores.championships.add("National League").await;
    (home, visiting, championship)
}

#[allow(dead_code)]
pub async fn seed_user(app: &TestApp, name: &str) -> User {
    app.stores
        .users
        .add(name, &format!("{}@example.com", name.to_lowercase()))
        .await
}

#[allow(dead_code)]
pub async fn seed_users(app: &TestApp, n: usize) -> Vec<User> {
    let mut users = Vec::with_capacity(n);
    for i in 0..n {
        users.push(seed_user(app, &format!("user{i}")).await);
    }
    users
}

/// A match already promoted to IN_PROGRESS, ready to take bets.
#[allow(dead_code)]
pub async fn seed_in_progress_match(
    app: &TestApp,
    home_team_id: i64,
    visiting_team_id: i64,
    championship_id: i64,
) -> Match {
    let m = Match::scheduled(
        home_team_id,
        visiting_team_id,
        championship_id,
        Utc::now() - Duration::minutes(10),
        2.0,
    );
    let mut m = app.stores.matches.insert(m).await.expect("insert match");
    m.status = MatchStatus::InProgress;
    app.stores.matches.save(&m).await.expect("save match");
    m
}

/// A wire-format timestamp `days` days in the future.
#[allow(dead_code)]
pub fn future_time(days: i64) -> String {
    format_match_time(Utc::now() + Duration::days(days))
}
