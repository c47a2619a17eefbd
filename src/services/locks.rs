use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Registry of per-match write locks.
///
/// Every writer of a Match row (odds engine, lifecycle scheduler, score
/// updates) takes that match's lock for the duration of its
/// read-modify-write, so concurrent bets on one match cannot lose counter
/// updates. Locks for distinct matches are independent; bets on different
/// matches proceed fully in parallel.
#[derive(Clone)]
pub struct MatchLocks {
    inner: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl MatchLocks {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Handle to the lock for `match_id`, created on first use. The registry
    /// lock is held only for the lookup, never across the match operation.
    pub async fn lock_for(&self, match_id: i64) -> Arc<Mutex<()>> {
        let mut registry = self.inner.lock().await;
        registry
            .entry(match_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for MatchLocks {
    fn default() -> Self {
        Self::new()
    }
}
