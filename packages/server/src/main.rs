use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{Level, info};

use server::config::AppConfig;
use server::seed;
use server::session::{SessionStore, spawn_pruner};
use server::state::AppState;
use server::store::MemStorage;

/// How often the session pruner sweeps expired entries.
const PRUNE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    let store = Arc::new(MemStorage::new());
    seed::seed_admin(&store, &config)?;
    if config.seed.demo_listings {
        seed::seed_demo_dogs(&store);
    }

    let sessions = Arc::new(SessionStore::new(chrono::Duration::hours(
        config.auth.session_ttl_hours,
    )));
    spawn_pruner(sessions.clone(), PRUNE_INTERVAL);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState {
        store,
        sessions,
        config: Arc::new(config),
    };

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
