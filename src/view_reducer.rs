use crate::app_config::Scatter;
use crate::domain::ViewState;
use crate::domain::events::Event;
use crate::geometry::random_points;
use rand::Rng;
use tracing::{debug, warn};

/// Applies one event to the view state. Whenever the resulting state has a
/// known location, valid bounds and an empty marker set, fresh markers are
/// scattered into it before it is returned.
pub fn reduce<R: Rng>(state: &ViewState, event: Event, scatter: &Scatter, rng: &mut R) -> ViewState {
    let next = match event {
        Event::LocationChanged(fix) => state.with_location(fix),
        Event::CameraMoved { bounds } => state.with_bounds(bounds),
        Event::MarkerSelected { index } => state.with_selected(index),
        Event::RefreshRequested => state.without_markers(),
    };

    scatter_if_needed(next, scatter, rng)
}

fn scatter_if_needed<R: Rng>(state: ViewState, scatter: &Scatter, rng: &mut R) -> ViewState {
    let Some((center, bounds)) = state.scatter_target() else {
        return state;
    };

    match random_points(center, &bounds, scatter.marker_count(), scatter.max_attempts(), rng) {
        Ok(points) => {
            debug!("🎲 Scattered {} marker(s)", points.len());
            state.with_markers(points)
        }
        Err(e) => {
            warn!("⚠️ Could not scatter markers: {}", e);
            state
        }
    }
}
