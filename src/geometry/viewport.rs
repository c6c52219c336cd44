use crate::domain::{GeoBounds, GeoPoint};

/// The region a map camera at `center` and `zoom` shows: the world spans 360
/// degrees at zoom 0 and halves per zoom step, applied to both axes.
pub fn visible_bounds(center: GeoPoint, zoom: u8) -> GeoBounds {
    let half_span = 360.0 / 2f64.powi(zoom as i32) / 2.0;

    GeoBounds {
        northeast: GeoPoint {
            latitude: center.latitude + half_span,
            longitude: center.longitude + half_span,
        },
        southwest: GeoPoint {
            latitude: center.latitude - half_span,
            longitude: center.longitude - half_span,
        },
    }
}
