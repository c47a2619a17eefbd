mod common;

use chrono::{Duration, Utc};

use matchbook::errors::{messages, AppError};
use matchbook::models::MatchStatus;
use matchbook::store::MatchStore;
use matchbook::util::format_match_time;

use common::{build_test_app, future_time, seed_reference_data};

#[tokio::test]
async fn created_match_starts_clean() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let view = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, &future_time(2))
        .await
        .expect("match should be created");

    assert_eq!(view.status, MatchStatus::NotStarted);
    assert_eq!(view.home_team_name, home.name);
    assert_eq!(view.visiting_team_name, visiting.name);
    assert_eq!(view.championship_name, championship.name);
    assert_eq!((view.home_score, view.visiting_score), (0, 0));
    assert_eq!(view.odds_home, 2.0);
    assert_eq!(view.odds_draw, 2.0);
    assert_eq!(view.odds_visiting, 2.0);

    let stored = app
        .stores
        .matches
        .find_by_id(view.match_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.total_bets, 0);
    assert_eq!(stored.total_bets_home, 0);
    assert_eq!(stored.total_bets_draw, 0);
    assert_eq!(stored.total_bets_visiting, 0);
}

#[tokio::test]
async fn past_kickoff_is_rejected() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let raw = format_match_time(Utc::now() - Duration::hours(1));
    let err = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, &raw)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BusinessRule(_)));
    assert_eq!(err.to_string(), messages::INVALID_MATCH_TIME);
}

#[tokio::test]
async fn unparseable_kickoff_is_rejected() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let err = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, "2026-12-01T18:00:00Z")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), messages::INVALID_DATE_FORMAT);
}

#[tokio::test]
async fn overlapping_schedule_conflicts_and_window_edge_is_inclusive() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;
    let third = app.stores.teams.add("Valley Rovers").await;

    let kickoff = Utc::now() + Duration::days(2);
    app.state
        .matches
        .create_match(
            home.id,
            visiting.id,
            championship.id,
            &format_match_time(kickoff),
        )
        .await
        .expect("first match should be created");

    // Shares a team, exactly three hours later: still inside the window.
    let err = app
        .state
        .matches
        .create_match(
            home.id,
            third.id,
            championship.id,
            &format_match_time(kickoff + Duration::hours(3)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), messages::CONFLICT_MATCH_TIME);

    // One minute past the window: accepted.
    app.state
        .matches
        .create_match(
            home.id,
            third.id,
            championship.id,
            &format_match_time(kickoff + Duration::hours(3) + Duration::minutes(1)),
        )
        .await
        .expect("match outside the window should be created");
}

#[tokio::test]
async fn identical_teams_are_rejected() {
    let app = build_test_app();
    let (home, _, championship) = seed_reference_data(&app).await;

    let err = app
        .state
        .matches
        .create_match(home.id, home.id, championship.id, &future_time(2))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BusinessRule(_)));
    assert_eq!(err.to_string(), messages::TEAMS_MUST_DIFFER);
}

#[tokio::test]
async fn validation_runs_in_pipeline_order() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    // A past kickoff beats everything else, even a nonexistent team.
    let raw_past = format_match_time(Utc::now() - Duration::hours(1));
    let err = app
        .state
        .matches
        .create_match(9999, 9999, championship.id, &raw_past)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::INVALID_MATCH_TIME);

    // A candidate that both conflicts and names identical teams fails on
    // the conflict: the window check runs before the team identity check.
    let kickoff = Utc::now() + Duration::days(3);
    app.state
        .matches
        .create_match(
            home.id,
            visiting.id,
            championship.id,
            &format_match_time(kickoff),
        )
        .await
        .expect("seed match should be created");

    let err = app
        .state
        .matches
        .create_match(home.id, home.id, championship.id, &format_match_time(kickoff))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn unknown_entities_yield_not_found() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let err = app
        .state
        .matches
        .create_match(9999, visiting.id, championship.id, &future_time(2))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::HOME_TEAM_NOT_FOUND);

    let err = app
        .state
        .matches
        .create_match(home.id, 9999, championship.id, &future_time(2))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::VISITING_TEAM_NOT_FOUND);

    let err = app
        .state
        .matches
        .create_match(home.id, visiting.id, 9999, &future_time(2))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::CHAMPIONSHIP_NOT_FOUND);
}

#[tokio::test]
async fn creation_publishes_on_the_lifecycle_stream() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let mut lifecycle = app.state.events.subscribe_lifecycle();
    let view = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, &future_time(2))
        .await
        .unwrap();

    let event = lifecycle.recv().await.expect("lifecycle event");
    assert_eq!(event.match_id, view.match_id);
    assert_eq!(event.home_team_name, home.name);
}

#[tokio::test]
async fn tick_promotes_due_matches_and_is_idempotent() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let view = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, &future_time(1))
        .await
        .unwrap();

    // Not due yet.
    assert_eq!(app.state.scheduler.tick().await.unwrap(), 0);

    // Pull the kickoff into the past, then tick.
    let mut m = app
        .stores
        .matches
        .find_by_id(view.match_id)
        .await
        .unwrap()
        .unwrap();
    m.match_time = Utc::now() - Duration::minutes(1);
    app.stores.matches.save(&m).await.unwrap();

    assert_eq!(app.state.scheduler.tick().await.unwrap(), 1);
    assert_eq!(app.state.scheduler.tick().await.unwrap(), 0);

    let m = app
        .stores
        .matches
        .find_by_id(view.match_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(m.status, MatchStatus::InProgress);
}

#[tokio::test]
async fn score_updates_require_an_open_match() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;

    let view = app
        .state
        .matches
        .create_match(home.id, visiting.id, championship.id, &future_time(2))
        .await
        .unwrap();

    let err = app
        .state
        .matches
        .update_score(view.match_id, 1, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));
    assert_eq!(err.to_string(), messages::CANNOT_UPDATE_SCORE);

    let err = app.state.matches.update_score(9999, 1, 0).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn score_update_publishes_on_the_odds_stream() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;
    let m = common::seed_in_progress_match(&app, home.id, visiting.id, championship.id).await;

    let mut odds = app.state.events.subscribe_odds();
    let view = app.state.matches.update_score(m.id, 2, 1).await.unwrap();
    assert_eq!((view.home_score, view.visiting_score), (2, 1));

    let event = odds.recv().await.expect("odds event");
    assert_eq!(event.match_id, m.id);
    assert_eq!((event.home_score, event.visiting_score), (2, 1));
}

#[tokio::test]
async fn in_progress_listing_filters_by_status() {
    let app = build_test_app();
    let (home, visiting, championship) = seed_reference_data(&app).await;
    let third = app.stores.teams.add("Valley Rovers").await;
    let fourth = app.stores.teams.add("Summit Town").await;

    common::seed_in_progress_match(&app, home.id, visiting.id, championship.id).await;
    app.state
        .matches
        .create_match(third.id, fourth.id, championship.id, &future_time(2))
        .await
        .unwrap();

    let in_progress = app.state.matches.find_in_progress().await.unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].status, MatchStatus::InProgress);

    let all = app.state.matches.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}
