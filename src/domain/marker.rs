use crate::domain::GeoPoint;
use serde::Serialize;

/// What the map service renders for a scattered point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub title: String,
    pub snippet: String,
    pub position: GeoPoint,
}

impl Marker {
    pub fn at(position: GeoPoint) -> Self {
        Marker {
            title: "Marker".to_string(),
            snippet: format!("lat: {} long: {}", position.latitude, position.longitude),
            position,
        }
    }
}
