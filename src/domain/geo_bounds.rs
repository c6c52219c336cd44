use crate::domain::GeoPoint;

/// A rectangular lat/lng region described by its northeast and southwest corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
}

impl GeoBounds {
    /// Compares corner magnitudes, not the signed span: a box mirrored around
    /// the equator or prime meridian (ne.lat 5, sw.lat -5) reads as degenerate.
    pub fn is_valid(&self) -> bool {
        (self.northeast.latitude.abs() - self.southwest.latitude.abs()) != 0.0
            && (self.northeast.longitude.abs() - self.southwest.longitude.abs()) != 0.0
    }

    /// Signed latitude span, negative when the corners are inverted.
    pub fn lat_span(&self) -> f64 {
        self.northeast.latitude - self.southwest.latitude
    }

    /// Signed longitude span, negative when the corners are inverted.
    pub fn lng_span(&self) -> f64 {
        self.northeast.longitude - self.southwest.longitude
    }
}
