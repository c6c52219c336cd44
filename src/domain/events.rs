use crate::domain::{GeoBounds, LocationFix};

#[derive(Debug)]
pub enum Event {
    LocationChanged(LocationFix),
    CameraMoved { bounds: GeoBounds },
    MarkerSelected { index: usize },
    RefreshRequested,
}
