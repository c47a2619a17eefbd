use matchbook::api::router::create_router;
use matchbook::config::AppConfig;
use matchbook::metrics::init_metrics;
use matchbook::services::scheduler::run_lifecycle_scheduler;
use matchbook::{db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Connecting to database...");
    let pool = db::init_pool(&config.database_url).await?;
    tracing::info!("Database connected");

    let metrics_handle = init_metrics();
    let stores = db::pg_stores(pool);
    let state = AppState::build(config, stores, metrics_handle);

    // --- Lifecycle scheduler: promotes matches whose kickoff has passed ---
    let scheduler = state.scheduler.clone();
    let interval_secs = state.config.scheduler_interval_secs;
    tokio::spawn(async move {
        run_lifecycle_scheduler(scheduler, interval_secs).await;
    });
    tracing::info!(interval_secs, "Lifecycle scheduler spawned");

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
