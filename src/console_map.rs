use crate::domain::commands::Command;
use crate::domain::events::Event;
use crate::domain::map_service::MapService;
use crate::geometry::visible_bounds;
use async_trait::async_trait;
use tokio::sync::mpsc::Sender;
use tracing::{info, instrument, warn};

/// Map collaborator that renders to the log instead of a screen. After a
/// camera move it reports the newly visible region back to the store, the role
/// a map SDK's camera-change callback plays.
#[derive(Debug)]
pub struct ConsoleMap {
    events_tx: Sender<Event>,
}

impl ConsoleMap {
    pub fn new(events_tx: Sender<Event>) -> Self {
        ConsoleMap { events_tx }
    }
}

#[async_trait]
impl MapService for ConsoleMap {
    #[instrument(skip_all)]
    async fn execute(&self, command: Command) {
        match command {
            Command::ClearMap => {
                info!("🗺️ Cleared the map");
            }
            Command::MoveCamera { center, zoom } => {
                info!("🗺️ Moved the camera to ({}, {}) at zoom {}", center.latitude, center.longitude, zoom);

                let bounds = visible_bounds(center, zoom);
                if self.events_tx.send(Event::CameraMoved { bounds }).await.is_err() {
                    warn!("🔴 The store is gone, dropping the camera moved event");
                }
            }
            Command::DrawAccuracyCircle {
                center,
                radius_meters,
                stroke_weight,
            } => {
                #[rustfmt::skip]
                info!("🗺️ Drew an accuracy circle of {:.0} m around ({}, {}) with stroke weight {}", radius_meters, center.latitude, center.longitude, stroke_weight);
            }
            Command::PlaceMarkers { markers } => match serde_json::to_string(&markers) {
                Ok(payload) => info!("📍 Placed {} marker(s): {}", markers.len(), payload),
                Err(e) => warn!("⚠️ Could not serialize {} marker(s): {}", markers.len(), e),
            },
            Command::ShowMarkerInfo { marker } => {
                info!("📍 {}: {}", marker.title, marker.snippet);
            }
        }
    }
}
