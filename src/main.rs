use crate::app_config::AppConfig;
use crate::console_map::ConsoleMap;
use crate::domain::events::Event;
use crate::domain::map_service::MapService;
use crate::location::{SimulatedLocationSource, UpdatePolicy};
use crate::store::Store;
use crate::store_listener::store_listener;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tokio::time::interval;
use tracing::{info, trace};

mod app_config;
mod console_map;
mod domain;
mod geometry;
mod location;
mod render_view;
mod store;
mod store_listener;
mod view_reducer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx, config.scatter().clone());
    let notifier_rx = store.notifier();

    let map_service: Arc<dyn MapService> = Arc::new(ConsoleMap::new(tx.clone()));
    let map_config = config.map().clone();
    task::spawn(async move {
        store_listener(notifier_rx, map_service, map_config).await;
    });
    info!("✅  Initialized store listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let refresh_interval = config.map().refresh_interval();
    let refresh_tx = tx.clone();
    task::spawn(async move {
        let mut ticker = interval(refresh_interval);
        ticker.tick().await; // The first tick completes immediately
        loop {
            ticker.tick().await;
            trace!("🔄 Requesting fresh markers");
            if refresh_tx.send(Event::RefreshRequested).await.is_err() {
                return;
            }
        }
    });
    info!("✅  Initialized marker refresh every {:?}", refresh_interval);

    let source = SimulatedLocationSource::new(*config.location(), config.location_simulator().clone());
    let policy = UpdatePolicy::new(config.location_updates());
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    location::listen(source, policy, tx).await;

    Ok(())
}
