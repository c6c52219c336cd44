use crate::app_config::Map;
use crate::domain::map_service::MapService;
use crate::render_view::render_view;
use crate::store::StoreSnapshot;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<StoreSnapshot>, map_service: Arc<dyn MapService>, map: Map) {
    while rx.changed().await.is_ok() {
        let snapshot: StoreSnapshot = rx.borrow().clone();
        render_view(&snapshot, map_service.as_ref(), &map).await;
    }
}
