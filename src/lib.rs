pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod services;
pub mod store;
pub mod util;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::services::betting::BetService;
use crate::services::conflict::ConflictValidator;
use crate::services::events::EventBus;
use crate::services::locks::MatchLocks;
use crate::services::matches::MatchService;
use crate::services::odds::OddsEngine;
use crate::services::scheduler::LifecycleScheduler;
use crate::store::Stores;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub stores: Stores,
    pub matches: MatchService,
    pub bets: BetService,
    pub scheduler: LifecycleScheduler,
    pub events: EventBus,
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Wire the service graph on top of a set of stores. The per-match lock
    /// registry is shared by every Match writer (odds engine, scheduler,
    /// score updates) so each match has exactly one writer at a time.
    pub fn build(config: AppConfig, stores: Stores, metrics_handle: PrometheusHandle) -> Self {
        let locks = MatchLocks::new();
        let events = EventBus::new(config.event_buffer_size);

        let validator = ConflictValidator::new(stores.matches.clone(), config.conflict_window_hours);
        let matches = MatchService::new(
            stores.clone(),
            validator,
            events.clone(),
            locks.clone(),
            config.base_odds,
        );
        let odds = OddsEngine::new(
            stores.matches.clone(),
            stores.users.clone(),
            locks.clone(),
            config.base_odds,
        );
        let bets = BetService::new(stores.clone(), odds, matches.clone(), events.clone());
        let scheduler = LifecycleScheduler::new(stores.matches.clone(), locks, config.base_odds);

        Self {
            config,
            stores,
            matches,
            bets,
            scheduler,
            events,
            metrics_handle,
        }
    }
}
