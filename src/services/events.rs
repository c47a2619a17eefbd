use metrics::gauge;
use tokio::sync::broadcast;

use crate::api::views::MatchView;

/// Two independent multicast channels feeding live subscribers: `lifecycle`
/// carries match-created events, `odds` carries odds/score changes.
///
/// Subscribers receive only events published after they subscribe. Each
/// channel buffer is bounded; a subscriber that falls more than the buffer
/// size behind loses the oldest events and is told how many were skipped
/// (`RecvError::Lagged`). Dropping a receiver releases its buffer.
#[derive(Clone)]
pub struct EventBus {
    lifecycle_tx: broadcast::Sender<MatchView>,
    odds_tx: broadcast::Sender<MatchView>,
}

impl EventBus {
    pub fn new(buffer_size: usize) -> Self {
        let (lifecycle_tx, _) = broadcast::channel(buffer_size);
        let (odds_tx, _) = broadcast::channel(buffer_size);
        Self {
            lifecycle_tx,
            odds_tx,
        }
    }

    /// Publish a newly created match. A send with no subscribers is a no-op.
    pub fn publish_match_created(&self, view: MatchView) {
        let _ = self.lifecycle_tx.send(view);
        gauge!("lifecycle_subscribers").set(self.lifecycle_tx.receiver_count() as f64);
    }

    /// Publish a refreshed snapshot after an odds or score change.
    pub fn publish_odds_update(&self, view: MatchView) {
        let _ = self.odds_tx.send(view);
        gauge!("odds_subscribers").set(self.odds_tx.receiver_count() as f64);
    }

    pub fn subscribe_lifecycle(&self) -> broadcast::Receiver<MatchView> {
        self.lifecycle_tx.subscribe()
    }

    pub fn subscribe_odds(&self) -> broadcast::Receiver<MatchView> {
        self.odds_tx.subscribe()
    }
}
