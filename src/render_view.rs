use crate::app_config::Map;
use crate::domain::commands::Command;
use crate::domain::map_service::MapService;
use crate::domain::{Marker, ViewState};
use tracing::instrument;

/// Derives the command sequence that redraws the map for a state: clear, then
/// the accuracy circle and camera at the device location, then the markers,
/// then the info window for the selected marker.
pub fn commands_for(state: &ViewState, map: &Map) -> Vec<Command> {
    let mut commands = vec![Command::ClearMap];

    if let Some(fix) = state.location() {
        let zoom = map.zoom_level();
        commands.push(Command::DrawAccuracyCircle {
            center: fix.point,
            radius_meters: fix.accuracy_meters * zoom as f64 * zoom as f64,
            stroke_weight: map.circle_stroke_weight(),
        });
        commands.push(Command::MoveCamera { center: fix.point, zoom });
    }

    if !state.markers().is_empty() {
        commands.push(Command::PlaceMarkers {
            markers: state.markers().iter().copied().map(Marker::at).collect(),
        });
    }

    if let Some(point) = state.selected().and_then(|index| state.markers().get(index)) {
        commands.push(Command::ShowMarkerInfo { marker: Marker::at(*point) });
    }

    commands
}

#[instrument(skip_all)]
pub async fn render_view(state: &ViewState, map_service: &dyn MapService, map: &Map) {
    for command in commands_for(state, map) {
        map_service.execute(command).await;
    }
}
