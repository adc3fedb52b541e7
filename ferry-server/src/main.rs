use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ferry_server::capacity::{CapacityClient, CapacityClientConfig};
use ferry_server::config::ServerConfig;
use ferry_server::network::bc_ferries_network;
use ferry_server::query::QueryResolver;
use ferry_server::refresh::RefreshScheduler;
use ferry_server::store::SnapshotStore;
use ferry_server::telemetry::Telemetry;
use ferry_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("invalid configuration");

    let telemetry = Telemetry::spawn();

    // Create the capacity feed client
    let mut feed_config =
        CapacityClientConfig::new().with_timeout(config.refresh_timeout.as_secs());
    if let Some(url) = &config.feed_url {
        feed_config = feed_config.with_base_url(url);
    }
    let feed = CapacityClient::new(feed_config).expect("failed to create capacity feed client");

    let store = SnapshotStore::new();
    let network = Arc::new(bc_ferries_network());

    let scheduler = RefreshScheduler::new(
        feed,
        store.clone(),
        telemetry.clone(),
        config.refresh_period,
        config.refresh_timeout,
    );

    // First refresh runs before the listener comes up, so the very first
    // request already sees data unless the feed itself is down.
    match scheduler.refresh_once().await {
        Ok(count) => info!(sailings = count, "loaded initial schedule"),
        Err(e) => {
            warn!(error = %e, "initial refresh failed, serving empty schedule until next tick");
            telemetry.refresh_failed(&e);
        }
    }

    tokio::spawn(scheduler.run());

    let resolver = QueryResolver::new(store, network);
    let state = AppState::new(resolver, telemetry);
    let app = create_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "ferry capacity server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server exited");
}
