use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        // Matches
        .route(
            "/api/matches",
            get(handlers::matches::list).post(handlers::matches::create),
        )
        .route("/api/matches/in-progress", get(handlers::matches::in_progress))
        .route("/api/matches/:id/score", put(handlers::matches::update_score))
        // Bets
        .route("/api/bets", post(handlers::bets::place))
        // Control
        .route("/api/control/tick", post(handlers::control::tick))
        // Live streams
        .route("/ws/lifecycle", get(handlers::streams::lifecycle))
        .route("/ws/odds", get(handlers::streams::odds))
        .layer(middleware::from_fn(require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
