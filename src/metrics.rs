use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // Pre-register counters so they appear even before the first increment.
    counter!("matches_created_total").absolute(0);
    counter!("matches_opened_total").absolute(0);
    counter!("bets_placed_total").absolute(0);
    counter!("odds_updates_total").absolute(0);

    // Pre-register gauges at zero.
    gauge!("lifecycle_subscribers").set(0.0);
    gauge!("odds_subscribers").set(0.0);

    // Histogram is lazily created on first record; force creation.
    histogram!("bet_placement_latency_seconds").record(0.0);

    handle
}
