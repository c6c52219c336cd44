use crate::domain::{GeoPoint, Marker};

#[derive(Debug, PartialEq)]
pub enum Command {
    ClearMap,
    MoveCamera {
        center: GeoPoint,
        zoom: u8,
    },
    DrawAccuracyCircle {
        center: GeoPoint,
        radius_meters: f64,
        stroke_weight: u32,
    },
    PlaceMarkers {
        markers: Vec<Marker>,
    },
    ShowMarkerInfo {
        marker: Marker,
    },
}
